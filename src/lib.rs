//! Travel platform API built with Rust.
//!
//! User registration/login/profile with JWT auth, role-based admission
//! control, and an admin-managed destination catalog. Records are persisted
//! to flat JSON files rewritten atomically on every mutation.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use services::{DestinationService, UserService};

use axum::routing::{get, post};

/// Build the API router (users, destinations, health). Used by main and by
/// integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let user_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/profile", get(auth::profile));

    axum::Router::new()
        .route("/health", get(handlers::http::health))
        .nest("/users", user_routes)
        .route(
            "/destinations",
            get(handlers::destinations::list).post(handlers::destinations::create),
        )
        .route(
            "/destinations/:id",
            axum::routing::patch(handlers::destinations::update)
                .delete(handlers::destinations::delete),
        )
        .with_state(state)
}
