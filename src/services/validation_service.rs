//! Validation service layer.
//!
//! Runs the requested provider checks concurrently, normalizes each outcome
//! and scores the lead.

use crate::client::AsyncProviderClient;
use crate::models::{AggregateResult, EmailResult, PhoneResult, ValidationRequest};
use crate::normalize::{normalize_email, normalize_phone};
use crate::scoring::score_results;
use async_trait::async_trait;
use std::sync::Arc;

/// Validation service trait for business operations.
#[async_trait]
pub trait ValidationService: Send + Sync {
    /// Validate every channel present in the request.
    ///
    /// Provider failures never fail the call; they show up as degraded
    /// per-field results.
    async fn validate(&self, request: &ValidationRequest) -> AggregateResult;
}

/// Default implementation of ValidationService.
pub struct ValidationServiceImpl {
    providers: Arc<dyn AsyncProviderClient>,
}

impl ValidationServiceImpl {
    /// Create a new validation service.
    pub fn new(providers: Arc<dyn AsyncProviderClient>) -> Self {
        Self { providers }
    }

    async fn check_email(&self, email: &str) -> EmailResult {
        normalize_email(email, self.providers.verify_email(email).await)
    }

    async fn check_phone(&self, number: &str, country: &str) -> PhoneResult {
        normalize_phone(number, self.providers.verify_phone(number, country).await)
    }
}

#[async_trait]
impl ValidationService for ValidationServiceImpl {
    async fn validate(&self, request: &ValidationRequest) -> AggregateResult {
        let email_check = async {
            match request.email() {
                Some(email) => Some(self.check_email(email).await),
                None => None,
            }
        };
        let phone_check = async {
            match request.phone() {
                Some(number) => Some(self.check_phone(number, request.country()).await),
                None => None,
            }
        };

        let (email, phone) = futures::join!(email_check, phone_check);
        let score = score_results(email.as_ref(), phone.as_ref());

        tracing::info!(
            email_checked = email.is_some(),
            phone_checked = phone.is_some(),
            score,
            "Lead validated"
        );

        AggregateResult {
            email,
            phone,
            score,
        }
    }
}
