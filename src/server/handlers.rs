//! Request handlers for the validation endpoint.

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{AggregateResult, ValidationRequest};
use crate::services::ValidationService;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    service: Arc<dyn ValidationService>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<dyn ValidationService>) -> Self {
        Self {
            config: Arc::new(config),
            service,
        }
    }
}

/// `POST /api/validate`
///
/// The credential is checked before the body is read, so an unconfigured
/// server answers 400 without contacting any provider. A body that is not a
/// valid request is an internal failure (500), matching every other error
/// raised while building the response.
pub async fn validate_lead(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AggregateResult>, ApiError> {
    if let Err(e) = state.config.api_key() {
        tracing::warn!("Rejecting validation request: {}", e);
        return Err(e.into());
    }

    let request: ValidationRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("Invalid request body: {}", e)))?;

    let result = state.service.validate(&request).await;
    Ok(Json(result))
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "configured": state.config.is_configured(),
    }))
}
