//! Destination catalog HTTP handlers. Mutations are admin-only.

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::policy;
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::{Destination, DestinationUpdate};

#[derive(Debug, Deserialize)]
pub struct CreateDestinationRequest {
    pub name: String,
    pub description: String,
    pub location: String,
}

/// Admin gate on the caller-supplied token. Missing, invalid, expired, and
/// non-admin tokens are all the same 403 here.
fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|h| h.strip_prefix("Bearer ").unwrap_or(h))
        .unwrap_or("");
    if !policy::authorize_admin(state.tokens(), token) {
        return Err(AppError::AdminRequired);
    }
    Ok(())
}

/// GET /destinations
pub async fn list(State(state): State<AppState>) -> Json<Vec<Destination>> {
    Json(state.destinations().list())
}

/// POST /destinations (admin only)
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateDestinationRequest>,
) -> Result<(StatusCode, Json<Destination>), AppError> {
    require_admin(&state, &headers)?;
    let destination = state
        .destinations()
        .add(&body.name, &body.description, &body.location)?;
    Ok((StatusCode::CREATED, Json(destination)))
}

/// PATCH /destinations/:id (admin only)
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<DestinationUpdate>,
) -> Result<Json<Destination>, AppError> {
    require_admin(&state, &headers)?;
    let destination = state.destinations().update(id, body)?;
    Ok(Json(destination))
}

/// DELETE /destinations/:id (admin only)
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;
    state.destinations().delete(id)?;
    Ok(Json(json!({ "message": "Destination deleted successfully" })))
}
