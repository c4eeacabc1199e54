//! REST API for production planning.
//!
//! Provides two endpoints:
//! - `POST /productionplan`: computes a plan for the posted request
//! - `GET /health`: liveness probe
//!
//! Handlers hold no state: each request is planned from its own body.

mod error;
mod handlers;
mod types;

use std::io;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use types::{ErrorResponse, HealthResponse};

use crate::config::ServerConfig;
use crate::telemetry::shutdown_signal;

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `config` - Server settings; only the request timeout is read here
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/productionplan", post(handlers::production_plan))
        .route("/health", get(handlers::health))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Binds to `config.host:config.port` and serves the API until Ctrl+C or
/// SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(config: &ServerConfig) -> io::Result<()> {
    let app = router(config);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "production plan API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}
