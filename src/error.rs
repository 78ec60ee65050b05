//! Error types for the Lead Validator.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur when calling a verification provider.
///
/// These never reach the endpoint caller: the aggregator folds them into a
/// degraded per-field result.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Provider error (status {status}): {message}")]
    StatusError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Blocking task could not be joined
    #[error("Task join error: {0}")]
    TaskError(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Provider credential is unset or still the placeholder
    #[error("Please set LEAD_VALIDATOR_API_KEY to your provider API key")]
    MissingApiKey,

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the `/api/validate` endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The endpoint is not configured to call providers (400)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Anything else that went wrong while building the response (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Config(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Config(err) => err.to_string(),
            ApiError::Internal(_) => "Failed to validate lead".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("Validation error: {}", detail);
        }
        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

/// Errors raised by the form controller before or while submitting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Neither email nor phone was entered
    #[error("Please enter an email or phone number")]
    EmptyLead,

    /// Country code is not in the supported list
    #[error("Unsupported country code: {0}")]
    UnsupportedCountry(String),

    /// A submission is already in flight
    #[error("A validation is already in progress")]
    Busy,
}

/// Errors raised while the form controller talks to the endpoint.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced a readable response
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The endpoint answered with something that is not JSON
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
