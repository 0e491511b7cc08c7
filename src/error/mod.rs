//! Application error types for robust error handling.
//!
//! Every expected condition crossing the core boundary has its own variant so
//! callers can tell validation, conflict, authentication, authorization, and
//! not-found apart without parsing messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password does not meet requirements")]
    WeakPassword,

    #[error("Invalid role specified")]
    InvalidRole,

    // Conflict
    #[error("Email already registered")]
    DuplicateEmail,

    // Authentication
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidCredentials,

    #[error("Authorization token required")]
    TokenRequired,

    #[error("Invalid or expired token")]
    TokenInvalid,

    // Authorization
    #[error("Invalid admin token")]
    InvalidAdminToken,

    #[error("Admin access required")]
    AdminRequired,

    // Not found
    #[error("Destination not found")]
    DestinationNotFound,

    // Store integrity. Fatal at startup: the service must not silently start
    // empty over an unreadable durable file.
    #[error("Corrupt store file {path}: {reason}")]
    CorruptStore { path: String, reason: String },

    #[error("Malformed password hash: {0}")]
    InvalidHash(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidEmail
            | AppError::WeakPassword
            | AppError::InvalidRole
            | AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::TokenRequired
            | AppError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AppError::InvalidAdminToken | AppError::AdminRequired => StatusCode::FORBIDDEN,
            AppError::UserNotFound | AppError::DestinationNotFound => StatusCode::NOT_FOUND,
            AppError::CorruptStore { .. }
            | AppError::InvalidHash(_)
            | AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
