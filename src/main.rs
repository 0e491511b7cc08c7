//! Entry point: load config, wire dependencies, and run the server.

use std::sync::Arc;

use chrono::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use travel_api::auth::TokenService;
use travel_api::config::Config;
use travel_api::services::{DestinationService, UserService};
use travel_api::store::{DestinationStore, UserStore};
use travel_api::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A corrupt store file aborts startup; starting empty over unreadable
    // records would silently shadow them.
    let user_store = Arc::new(
        UserStore::open(&config.users_file).map_err(|e| anyhow::anyhow!("user store: {}", e))?,
    );
    let destination_store = Arc::new(
        DestinationStore::open(&config.destinations_file)
            .map_err(|e| anyhow::anyhow!("destination store: {}", e))?,
    );

    let tokens = TokenService::new(&config.jwt_secret, Duration::hours(config.token_ttl_hours));
    let users = UserService::new(user_store, tokens.clone(), config.admin_secret.clone());
    let destinations = DestinationService::new(destination_store);

    let state = AppState {
        users,
        destinations,
        tokens,
    };

    let app = create_app(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
