//! HTTP server exposing the validation endpoint.
//!
//! Routes:
//! - `POST /api/validate`: validate a lead and return its score
//! - `GET /api/health`: liveness plus whether a provider key is configured

pub mod handlers;

pub use handlers::AppState;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/validate", post(handlers::validate_lead))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}

/// Bind `bind_address` and serve until Ctrl-C.
pub async fn run_server(state: AppState, bind_address: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Lead validator listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
