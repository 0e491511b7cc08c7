//! Auth middleware: verified token claims as an axum extractor.

use axum::http::header::AUTHORIZATION;

use crate::auth::Claims;
use crate::error::AppError;
use crate::handlers::http::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extractor: verified claims from the `Authorization` header.
///
/// Accepts either `Bearer <token>` or a raw token, per deployment. A missing
/// header is `TokenRequired` (401); a header that fails verification is
/// `TokenInvalid` (401).
#[derive(Clone, Debug)]
pub struct AuthClaims(pub Claims);

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenRequired)?;
        let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(header);
        let claims = state.tokens().verify(token).ok_or(AppError::TokenInvalid)?;
        Ok(AuthClaims(claims))
    }
}
