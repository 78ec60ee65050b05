//! Normalized verification results returned by the validation endpoint.

use serde::{Deserialize, Serialize};

/// Line type reported when the provider does not name one.
pub const UNKNOWN_LINE_TYPE: &str = "Unknown";

/// Outcome of the email check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailResult {
    /// The address exactly as submitted
    pub email: String,

    /// Whether the provider considers the address deliverable
    pub valid: bool,

    /// Whether the address belongs to a throwaway mail domain
    pub disposable: bool,

    /// Mail domain, from the provider or the input after `@`
    pub domain: Option<String>,
}

impl EmailResult {
    /// An email counts towards the score only if valid and not disposable.
    pub fn passed(&self) -> bool {
        self.valid && !self.disposable
    }
}

/// Outcome of the phone check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneResult {
    /// The number exactly as submitted
    pub number: String,

    /// Whether the provider considers the number valid
    pub valid: bool,

    /// International format, when the provider produced one
    pub formatted: Option<String>,

    /// Line type such as "mobile" or "landline"
    #[serde(rename = "type")]
    pub line_type: String,

    /// Carrier name, when known
    pub carrier: Option<String>,
}

impl PhoneResult {
    pub fn passed(&self) -> bool {
        self.valid
    }
}

/// Combined result for one lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AggregateResult {
    pub email: Option<EmailResult>,
    pub phone: Option<PhoneResult>,

    /// Percentage of supplied checks that passed (0-100)
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_serializes_type_field() {
        let phone = PhoneResult {
            number: "5551234567".to_string(),
            valid: true,
            formatted: Some("+15551234567".to_string()),
            line_type: "mobile".to_string(),
            carrier: None,
        };
        let json = serde_json::to_value(&phone).unwrap();
        assert_eq!(json["type"], "mobile");
        assert!(json["carrier"].is_null());
    }

    #[test]
    fn test_aggregate_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(AggregateResult::default()).unwrap();
        assert!(json["email"].is_null());
        assert!(json["phone"].is_null());
        assert_eq!(json["score"], 0);
    }

    #[test]
    fn test_email_passed_policy() {
        let mut email = EmailResult {
            email: "a@b.com".to_string(),
            valid: true,
            disposable: false,
            domain: Some("b.com".to_string()),
        };
        assert!(email.passed());

        email.disposable = true;
        assert!(!email.passed());

        email.disposable = false;
        email.valid = false;
        assert!(!email.passed());
    }
}
