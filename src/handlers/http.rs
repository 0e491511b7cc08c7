//! Shared HTTP state and liveness probe.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::TokenService;
use crate::services::{DestinationService, UserService};

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub destinations: DestinationService,
    pub tokens: TokenService,
}

impl AppState {
    pub fn users(&self) -> &UserService {
        &self.users
    }
    pub fn destinations(&self) -> &DestinationService {
        &self.destinations
    }
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "travel-api" })),
    )
}
