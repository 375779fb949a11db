use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::handlers::handlers::{
    connect_platform, get_analytics, get_status, list_videos, login, publish_video,
};
use crate::service::state::AppState;
use crate::store::accounts::AccountStore;
use crate::utils::log::init_logger_once;

/// Builds the API router. CORS is wide open: the dashboard frontend is
/// served from a different origin during development.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/login", post(login))
        .route("/api/connect/{platform}", post(connect_platform))
        .route("/api/videos/{username}", get(list_videos))
        .route("/api/publish", post(publish_video))
        .route("/api/analytics/{username}", get(get_analytics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Seeds the store, binds the listener, and serves until the process exits.
pub async fn start_axum_server(address: Option<String>) -> Result<()> {
    init_logger_once();

    let addr_str = address.unwrap_or_else(|| "0.0.0.0:3001".to_string());
    let addr: SocketAddr = addr_str
        .parse()
        .with_context(|| format!("invalid listen address {addr_str}"))?;

    let state = Arc::new(AppState::new(AccountStore::with_seed_data()));
    let app = app_router(state);

    info!("Starting server at http://{}", addr_str);

    axum_server::Server::bind(addr)
        .serve(app.into_make_service())
        .await
        .context("server exited")?;

    Ok(())
}
