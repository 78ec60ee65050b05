//! Validation request sent to `POST /api/validate`.

use serde::{Deserialize, Serialize};

/// Country used when the request does not name one.
pub const DEFAULT_COUNTRY: &str = "US";

/// A lead submitted for validation.
///
/// Both channels are optional and an empty string counts as absent. The
/// endpoint does not require either one; a request with neither simply
/// scores 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ValidationRequest {
    /// Email address to verify
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number to verify, in whatever format the user typed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// ISO-3166 alpha-2 country code for the phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ValidationRequest {
    /// Build a request from raw form values.
    pub fn new(
        email: impl Into<String>,
        phone: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            phone: Some(phone.into()),
            country: Some(country.into()),
        }
    }

    /// The email to check, if one was supplied.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }

    /// The phone number to check, if one was supplied.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }

    /// The country code, defaulting to [`DEFAULT_COUNTRY`].
    pub fn country(&self) -> &str {
        self.country
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COUNTRY)
    }

    /// Whether at least one channel is present.
    pub fn has_contact(&self) -> bool {
        self.email().is_some() || self.phone().is_some()
    }
}
