//! Application configuration loaded from environment.

use std::net::SocketAddr;

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. `0.0.0.0:5000`).
    pub server_addr: SocketAddr,
    /// Path of the durable user store file.
    pub users_file: String,
    /// Path of the durable destination store file.
    pub destinations_file: String,
    /// JWT signing secret (min 32 chars). Never logged.
    pub jwt_secret: String,
    /// Shared secret required to register an admin account. Deployment
    /// configuration, not core behavior.
    pub admin_secret: String,
    /// Token time-to-live in hours.
    pub token_ttl_hours: i64,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()`
    /// before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let server_addr =
            std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let server_addr: SocketAddr = server_addr
            .parse()
            .map_err(|_| ConfigLoadError::InvalidServerAddr)?;

        let users_file = std::env::var("USERS_FILE").unwrap_or_else(|_| "users.json".to_string());
        let destinations_file = std::env::var("DESTINATIONS_FILE")
            .unwrap_or_else(|_| "destinations.json".to_string());
        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "travel_jwt_secret_change_in_production_32chars".to_string());
        let admin_secret =
            std::env::var("ADMIN_SECRET").unwrap_or_else(|_| "travel_admin_secret".to_string());
        let token_ttl_hours = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<i64>()
            .map_err(|_| ConfigLoadError::InvalidTokenTtl)?;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server_addr,
            users_file,
            destinations_file,
            jwt_secret,
            admin_secret,
            token_ttl_hours,
            log_level,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid SERVER_ADDR")]
    InvalidServerAddr,
    #[error("Invalid TOKEN_TTL_HOURS")]
    InvalidTokenTtl,
}
