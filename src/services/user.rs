//! User directory service: registration, login, profile retrieval.

use std::sync::Arc;

use tracing::{debug, info};
use validator::ValidateEmail;

use crate::auth::{PasswordService, TokenService, TokenSubject};
use crate::error::{AppError, AppResult};
use crate::models::{Role, User, UserProfile};
use crate::store::UserStore;

const MIN_PASSWORD_LEN: usize = 8;

/// Orchestrates the credential store, the password hasher, and the token
/// service. One instance per process, constructed at startup and shared via
/// cheap clones; never a global.
#[derive(Clone)]
pub struct UserService {
    store: Arc<UserStore>,
    tokens: TokenService,
    admin_secret: String,
}

impl UserService {
    pub fn new(store: Arc<UserStore>, tokens: TokenService, admin_secret: String) -> Self {
        Self {
            store,
            tokens,
            admin_secret,
        }
    }

    /// Register a new account. Per email the only transition is
    /// unregistered -> registered; there is no update or deletion path.
    ///
    /// Registering an admin additionally requires the out-of-band admin
    /// secret. That gate sits on the registration path itself and is
    /// separate from post-login admission control.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
        admin_token: Option<&str>,
    ) -> AppResult<UserProfile> {
        validate_email(email)?;
        validate_password(password)?;
        if role.is_admin() && admin_token != Some(self.admin_secret.as_str()) {
            debug!(email, "admin registration with bad admin token");
            return Err(AppError::InvalidAdminToken);
        }

        let password_hash = PasswordService::hash(password)?;
        let user = User {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role,
        };
        let profile = UserProfile::from(&user);

        // The store rejects duplicates under its own write lock, so two
        // concurrent registrations for one email cannot both succeed.
        self.store.insert_new(user)?;

        info!(email, role = %role, "user registered");
        Ok(profile)
    }

    /// Authenticate and return a signed token carrying the stored role.
    pub fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self.store.get(email).ok_or(AppError::UserNotFound)?;

        if !PasswordService::verify(password, &user.password_hash)? {
            debug!(email, "password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        self.tokens.issue(&TokenSubject {
            email: user.email,
            role: user.role,
        })
    }

    /// Profile lookup. The returned shape never includes the password hash.
    pub fn profile(&self, email: &str) -> AppResult<UserProfile> {
        self.store
            .get(email)
            .map(|user| UserProfile::from(&user))
            .ok_or(AppError::UserNotFound)
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    if !email.validate_email() {
        return Err(AppError::InvalidEmail);
    }
    Ok(())
}

/// Fixed policy: minimum 8 characters with at least one letter and one
/// digit.
fn validate_password(password: &str) -> AppResult<()> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if password.len() < MIN_PASSWORD_LEN || !has_letter || !has_digit {
        return Err(AppError::WeakPassword);
    }
    Ok(())
}
