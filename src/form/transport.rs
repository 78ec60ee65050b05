//! Transport used by the form controller to reach the endpoint.

use crate::error::TransportError;
use crate::models::ValidationRequest;
use serde_json::Value;
use std::time::Duration;

/// Sends a validation request and returns the decoded JSON reply.
///
/// Error statuses still carry a JSON body (`{"error": ...}`), so only
/// failures that leave no readable body are errors here.
pub trait ValidateTransport {
    fn post_validate(&self, request: &ValidationRequest) -> Result<Value, TransportError>;
}

/// Blocking HTTP transport for a running validation server.
#[derive(Clone)]
pub struct HttpTransport {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport for the server at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            endpoint: format!("{}/api/validate", base_url.trim_end_matches('/')),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ValidateTransport for HttpTransport {
    fn post_validate(&self, request: &ValidationRequest) -> Result<Value, TransportError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = match self.agent.post(&self.endpoint).send_json(request) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                tracing::debug!("POST {} - status {}", self.endpoint, code);
                response
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(TransportError::HttpError(transport.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|e| TransportError::HttpError(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
