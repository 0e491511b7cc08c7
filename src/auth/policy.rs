//! Role-based admission control.

use crate::auth::TokenService;

/// True iff the token verifies and carries the admin role.
///
/// A missing, expired, tampered, or non-admin token all yield `false`; this
/// call alone cannot distinguish unauthenticated from unauthorized. Pure
/// with respect to the token input, no side effects.
pub fn authorize_admin(tokens: &TokenService, token: &str) -> bool {
    tokens
        .verify(token)
        .is_some_and(|claims| claims.role.is_admin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenSubject;
    use crate::models::Role;
    use chrono::Duration;

    fn service() -> TokenService {
        TokenService::new("test-jwt-secret-min-32-chars!!", Duration::hours(2))
    }

    #[test]
    fn admin_token_authorized() {
        let tokens = service();
        let token = tokens
            .issue(&TokenSubject {
                email: "admin@travel.com".to_string(),
                role: Role::Admin,
            })
            .unwrap();
        assert!(authorize_admin(&tokens, &token));
    }

    #[test]
    fn user_token_not_authorized() {
        let tokens = service();
        let token = tokens
            .issue(&TokenSubject {
                email: "user@travel.com".to_string(),
                role: Role::User,
            })
            .unwrap();
        assert!(!authorize_admin(&tokens, &token));
    }

    #[test]
    fn expired_admin_token_not_authorized() {
        let tokens = service();
        let token = tokens
            .issue_with_ttl(
                &TokenSubject {
                    email: "admin@travel.com".to_string(),
                    role: Role::Admin,
                },
                Duration::seconds(-1),
            )
            .unwrap();
        assert!(!authorize_admin(&tokens, &token));
    }

    #[test]
    fn garbage_not_authorized() {
        let tokens = service();
        assert!(!authorize_admin(&tokens, ""));
        assert!(!authorize_admin(&tokens, "bogus"));
    }
}
