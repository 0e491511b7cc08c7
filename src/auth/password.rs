//! Password hashing: argon2 with a random salt per call.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

pub struct PasswordService;

impl PasswordService {
    /// Hash a password into a PHC string. The salt is random per call, so
    /// hashing the same password twice yields different outputs.
    pub fn hash(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("hash: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// A malformed stored hash is an `InvalidHash` error; a mismatch is
    /// `Ok(false)`, never an error. The comparison inside the argon2 crate
    /// is constant-time.
    pub fn verify(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AppError::InvalidHash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hash = PasswordService::hash("mypassword1").unwrap();
        assert!(PasswordService::verify("mypassword1", &hash).unwrap());
        assert!(!PasswordService::verify("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = PasswordService::hash("Password123").unwrap();
        let second = PasswordService::hash("Password123").unwrap();
        assert_ne!(first, second);
        assert!(PasswordService::verify("Password123", &first).unwrap());
        assert!(PasswordService::verify("Password123", &second).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error_not_a_mismatch() {
        let err = PasswordService::verify("whatever", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AppError::InvalidHash(_)));
    }
}
