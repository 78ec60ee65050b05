use async_trait::async_trait;
use lead_validator::client::{AsyncProviderClient, ProviderResponse};
use lead_validator::error::{ProviderError, ProviderResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock verification providers for testing.
///
/// Each provider replies with a configured JSON body, or fails with a
/// transport error when no body is configured. Calls are counted so tests
/// can assert which providers were contacted.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockProviderClient {
    email_reply: Arc<Mutex<Option<Value>>>,
    phone_reply: Arc<Mutex<Option<Value>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    last_country: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockProviderClient {
    /// Create a mock whose providers both fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body the email provider answers with.
    pub fn with_email_reply(self, body: Value) -> Self {
        *self.email_reply.lock().unwrap() = Some(body);
        self
    }

    /// Set the body the phone provider answers with.
    pub fn with_phone_reply(self, body: Value) -> Self {
        *self.phone_reply.lock().unwrap() = Some(body);
        self
    }

    /// Get the number of times a provider was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls across both providers.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Country passed to the most recent phone lookup.
    pub fn last_country(&self) -> Option<String> {
        self.last_country.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn reply(slot: &Mutex<Option<Value>>) -> ProviderResult<ProviderResponse> {
        match slot.lock().unwrap().clone() {
            Some(body) => serde_json::from_value(body).map_err(ProviderError::JsonError),
            None => Err(ProviderError::HttpError("Connection failed".to_string())),
        }
    }
}

#[async_trait]
impl AsyncProviderClient for MockProviderClient {
    async fn verify_email(&self, _email: &str) -> ProviderResult<ProviderResponse> {
        self.track_call("verify_email");
        Self::reply(&self.email_reply)
    }

    async fn verify_phone(
        &self,
        _number: &str,
        country: &str,
    ) -> ProviderResult<ProviderResponse> {
        self.track_call("verify_phone");
        *self.last_country.lock().unwrap() = Some(country.to_string());
        Self::reply(&self.phone_reply)
    }
}
