//! User HTTP handlers: register, login, profile.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::AuthClaims;
use crate::models::{Role, UserProfile};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub admin_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let role = match body.role.as_deref() {
        Some(raw) => raw.parse::<Role>()?,
        None => Role::User,
    };
    let user = state.users().register(
        &body.name,
        &body.email,
        &body.password,
        role,
        body.admin_token.as_deref(),
    )?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state.users().login(&body.email, &body.password)?;
    Ok(Json(LoginResponse { token }))
}

/// GET /users/profile — identity comes from the verified token, not a query
/// parameter.
pub async fn profile(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state.users().profile(&claims.email)?;
    Ok(Json(profile))
}
