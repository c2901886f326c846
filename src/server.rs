use axum::{Extension, Router, routing::{get, post}};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api,
    config::{self, AppContext},
    error, success,
};

/// Builds the application router with the shared context installed.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api/generate", post(api::generate))
        .route("/api/status", get(api::status))
        .route("/api/generate-mv", post(api::generate_mv))
        .route("/api/mv-status", get(api::mv_status))
        .layer(Extension(ctx))
}

/// Binds the server and serves requests until the process exits.
///
/// `addr_override` takes precedence over the configured `SERVER_ADDRESS`.
pub async fn start_api_server(ctx: Arc<AppContext>, addr_override: Option<String>) {
    let app = router(ctx);

    let addr_str = addr_override.unwrap_or_else(config::server_addr);
    let addr = match SocketAddr::from_str(&addr_str) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    success!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
