//! Async wrapper around synchronous ProviderClient.
//!
//! This module provides an async interface to the synchronous ProviderClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{ProviderClient, ProviderResponse};
use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async trait for the verification provider calls.
///
/// The validation service depends on this trait rather than on
/// [`ProviderClient`] so tests can substitute an in-memory provider.
#[async_trait]
pub trait AsyncProviderClient: Send + Sync {
    async fn verify_email(&self, email: &str) -> ProviderResult<ProviderResponse>;
    async fn verify_phone(&self, number: &str, country: &str)
        -> ProviderResult<ProviderResponse>;
}

/// Async wrapper around synchronous ProviderClient.
#[derive(Clone)]
pub struct AsyncProviderClientImpl {
    client: Arc<ProviderClient>,
}

impl AsyncProviderClientImpl {
    pub fn new(client: ProviderClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncProviderClient for AsyncProviderClientImpl {
    async fn verify_email(&self, email: &str) -> ProviderResult<ProviderResponse> {
        let client = self.client.clone();
        let email = email.to_string();

        tokio::task::spawn_blocking(move || client.verify_email(&email))
            .await
            .map_err(|e| ProviderError::TaskError(e.to_string()))?
    }

    async fn verify_phone(
        &self,
        number: &str,
        country: &str,
    ) -> ProviderResult<ProviderResponse> {
        let client = self.client.clone();
        let number = number.to_string();
        let country = country.to_string();

        tokio::task::spawn_blocking(move || client.verify_phone(&number, &country))
            .await
            .map_err(|e| ProviderError::TaskError(e.to_string()))?
    }
}
