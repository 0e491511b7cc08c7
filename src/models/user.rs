//! User account model and role taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Account role. Admins may manage the destination catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" | "User" => Ok(Role::User),
            "admin" | "Admin" => Ok(Role::Admin),
            _ => Err(AppError::InvalidRole),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A stored account, keyed by email (case-sensitive, unique).
/// `password_hash` is an argon2 PHC string; plaintext never survives
/// registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// The only user shape that crosses the boundary outward. Deliberately has
/// no password field of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn role_rejects_unknown_values() {
        assert!(matches!(
            "superuser".parse::<Role>(),
            Err(AppError::InvalidRole)
        ));
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn profile_never_carries_password_material() {
        let user = User {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            role: Role::User,
        };
        let profile = UserProfile::from(&user);
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("email").unwrap(), "jane@example.com");
    }
}
