use crate::config::ServiceConfig;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

/// Shared, read-only state. Upstream clients are created per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/sales/summary", get(handlers::get_sales_summary))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Binds to `addr` and serves until the process is stopped.
pub async fn run_server(config: ServiceConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Sales report service listening on http://{}", listener.local_addr()?);

    serve(listener, config).await
}

/// Serves on an already-bound listener (used by tests with port 0).
pub async fn serve(listener: tokio::net::TcpListener, config: ServiceConfig) -> anyhow::Result<()> {
    tracing::info!("Record source: {}", config.source.endpoint);
    let app = router(AppState::new(config));
    axum::serve(listener, app).await?;
    Ok(())
}
