//! Email provider payload normalization.

use super::fields::{first_string, first_truthy, FieldPath};
use crate::client::ProviderResponse;
use crate::error::ProviderResult;
use crate::models::EmailResult;

/// Fields consulted for deliverability, in order.
pub const VALID_FIELDS: &[FieldPath] = &[&["valid"], &["isValid"]];

/// Fields consulted for the disposable flag, in order.
pub const DISPOSABLE_FIELDS: &[FieldPath] = &[&["isDisposable"], &["disposable"]];

/// Fields consulted for the mail domain, in order.
pub const DOMAIN_FIELDS: &[FieldPath] = &[&["domain"]];

/// Domain part of an address: whatever follows the first `@`.
pub fn email_domain(email: &str) -> Option<String> {
    email
        .split('@')
        .nth(1)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
}

/// Turn the email provider outcome into an [`EmailResult`].
///
/// Failures and non-"ok" envelopes produce a result with `valid = false` and
/// the domain taken from the input.
pub fn normalize_email(email: &str, outcome: ProviderResult<ProviderResponse>) -> EmailResult {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Email validation error: {}", e);
            return degraded(email);
        }
    };

    let Some(data) = response.ok_data() else {
        tracing::warn!(
            "Email provider returned status {:?} without usable data",
            response.status
        );
        return degraded(email);
    };

    EmailResult {
        email: email.to_string(),
        valid: first_truthy(data, VALID_FIELDS).is_some(),
        disposable: first_truthy(data, DISPOSABLE_FIELDS).is_some(),
        domain: first_string(data, DOMAIN_FIELDS).or_else(|| email_domain(email)),
    }
}

fn degraded(email: &str) -> EmailResult {
    EmailResult {
        email: email.to_string(),
        valid: false,
        disposable: false,
        domain: email_domain(email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use serde_json::json;

    fn ok(data: serde_json::Value) -> ProviderResult<ProviderResponse> {
        Ok(ProviderResponse {
            status: Some("ok".to_string()),
            data: Some(data),
        })
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("a@b.com"), Some("b.com".to_string()));
        assert_eq!(email_domain("no-at-sign"), None);
        assert_eq!(email_domain("trailing@"), None);
    }

    #[test]
    fn test_domain_falls_back_to_input() {
        let result = normalize_email("a@b.com", ok(json!({"valid": true})));
        assert_eq!(result.domain.as_deref(), Some("b.com"));
        assert!(result.valid);
        assert!(!result.disposable);
        assert!(result.passed());
    }

    #[test]
    fn test_provider_domain_wins() {
        let result = normalize_email(
            "a@b.com",
            ok(json!({"valid": true, "domain": "mail.b.com"})),
        );
        assert_eq!(result.domain.as_deref(), Some("mail.b.com"));
    }

    #[test]
    fn test_disposable_mailinator() {
        let result = normalize_email(
            "test@mailinator.com",
            ok(json!({"isDisposable": true, "valid": true})),
        );
        assert_eq!(
            result,
            EmailResult {
                email: "test@mailinator.com".to_string(),
                valid: true,
                disposable: true,
                domain: Some("mailinator.com".to_string()),
            }
        );
        assert!(!result.passed());
    }

    #[test]
    fn test_alternate_field_names() {
        let result = normalize_email(
            "a@b.com",
            ok(json!({"isValid": true, "disposable": true})),
        );
        assert!(result.valid);
        assert!(result.disposable);
    }

    #[test]
    fn test_non_ok_status_degrades() {
        let outcome = Ok(ProviderResponse {
            status: Some("error".to_string()),
            data: Some(json!({"valid": true})),
        });
        let result = normalize_email("a@b.com", outcome);
        assert!(!result.valid);
        assert_eq!(result.domain.as_deref(), Some("b.com"));
    }

    #[test]
    fn test_transport_failure_degrades() {
        let result = normalize_email("a@b.com", Err(ProviderError::Timeout));
        assert!(!result.valid);
        assert!(!result.disposable);
        assert_eq!(result.domain.as_deref(), Some("b.com"));
    }
}
