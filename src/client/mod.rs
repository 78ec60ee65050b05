//! HTTP client for the email and phone verification providers.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and error
//! mapping; interpreting the provider payload is left to [`crate::normalize`].

mod async_wrapper;
pub use async_wrapper::{AsyncProviderClient, AsyncProviderClientImpl};

use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Envelope shared by both verification providers.
///
/// The `data` payload is kept as raw JSON because the field names inside it
/// vary between provider versions.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProviderResponse {
    /// "ok" on success, anything else is a failure
    #[serde(default)]
    pub status: Option<String>,

    /// Provider-specific result payload
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ProviderResponse {
    /// The payload, only when the provider reported success.
    pub fn ok_data(&self) -> Option<&serde_json::Value> {
        if self.status.as_deref() != Some("ok") {
            return None;
        }
        self.data.as_ref().filter(|data| !data.is_null())
    }
}

/// HTTP client for the verification providers.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ProviderClient {
    email_api_url: String,
    phone_api_url: String,

    /// API key sent as `x-api-key`
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl ProviderClient {
    /// Create a new ProviderClient from configuration.
    ///
    /// An unset key is sent as an empty header; the endpoint refuses to call
    /// providers in that case anyway.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            email_api_url: config.email_api_url.clone(),
            phone_api_url: config.phone_api_url.clone(),
            api_key: config.api_key().unwrap_or_default().to_string(),
            agent: Arc::new(agent),
        }
    }

    /// Create a ProviderClient with custom endpoints (useful for testing).
    #[doc(hidden)]
    pub fn with_urls(email_api_url: String, phone_api_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            email_api_url,
            phone_api_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Append a query string to an endpoint that may already carry one.
    fn build_url(endpoint: &str, query: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, query)
    }

    /// Execute a GET request with authentication and decode the envelope.
    fn get(&self, url: &str) -> ProviderResult<ProviderResponse> {
        let start = Instant::now();
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("x-api-key", &self.api_key)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e))?;

        let body = response
            .into_string()
            .map_err(|e| ProviderError::HttpError(e.to_string()))?;

        tracing::debug!("GET {} - {} ms", url, start.elapsed().as_millis());

        serde_json::from_str(&body).map_err(ProviderError::JsonError)
    }

    /// Map a ureq error to a ProviderError.
    fn map_error(&self, error: ureq::Error) -> ProviderError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                ProviderError::StatusError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProviderError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProviderError::Timeout
                } else {
                    ProviderError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Ask the email provider about an address.
    pub fn verify_email(&self, email: &str) -> ProviderResult<ProviderResponse> {
        let query = format!("email={}", urlencoding::encode(email));
        self.get(&Self::build_url(&self.email_api_url, &query))
    }

    /// Ask the phone provider about a number in the given country.
    pub fn verify_phone(&self, number: &str, country: &str) -> ProviderResult<ProviderResponse> {
        let query = format!(
            "number={}&country={}",
            urlencoding::encode(number),
            urlencoding::encode(country)
        );
        self.get(&Self::build_url(&self.phone_api_url, &query))
    }
}
