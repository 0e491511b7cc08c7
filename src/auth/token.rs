//! Signed claim tokens: issue and verify.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::Role;

/// Claims carried by a token. Stateless: everything needed to authorize a
/// request is in here, verifiable without touching the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    /// Absolute expiry (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

/// The identity a token is issued for.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub email: String,
    pub role: Role,
}

/// Issues and verifies HS256 tokens.
///
/// Key material is derived once at construction and immutable afterwards;
/// the secret itself is never logged.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token with the service's default ttl.
    pub fn issue(&self, subject: &TokenSubject) -> AppResult<String> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a token with an explicit ttl. Expiry is absolute: issuance
    /// time + ttl.
    pub fn issue_with_ttl(&self, subject: &TokenSubject, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            email: subject.email.clone(),
            role: subject.role,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token encode: {}", e)))
    }

    /// Verify a token. `None` (not an error) for a bad signature, a
    /// malformed structure, or an expired token.
    ///
    /// Expiry comparison is exact: the default 60-second leeway is turned
    /// off on purpose, there is no clock-skew tolerance window.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .ok()
    }
}
