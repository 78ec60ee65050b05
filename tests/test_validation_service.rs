//! Aggregation tests for ValidationServiceImpl against in-memory providers.

mod mocks;

use lead_validator::models::ValidationRequest;
use lead_validator::services::{ValidationService, ValidationServiceImpl};
use mocks::MockProviderClient;
use serde_json::json;
use std::sync::Arc;

fn service(providers: &MockProviderClient) -> ValidationServiceImpl {
    ValidationServiceImpl::new(Arc::new(providers.clone()))
}

fn email_request(email: &str) -> ValidationRequest {
    ValidationRequest {
        email: Some(email.to_string()),
        ..Default::default()
    }
}

fn good_email() -> serde_json::Value {
    json!({"status": "ok", "data": {"valid": true, "isDisposable": false}})
}

#[tokio::test]
async fn test_passing_email_scores_100() {
    let providers = MockProviderClient::new().with_email_reply(good_email());

    let result = service(&providers).validate(&email_request("a@b.com")).await;

    assert_eq!(result.score, 100);
    assert!(result.phone.is_none());
    assert_eq!(result.email.unwrap().domain.as_deref(), Some("b.com"));
    assert_eq!(providers.get_call_count("verify_email"), 1);
    assert_eq!(providers.get_call_count("verify_phone"), 0);
}

#[tokio::test]
async fn test_disposable_email_scores_0() {
    let providers = MockProviderClient::new().with_email_reply(json!({
        "status": "ok",
        "data": {"isDisposable": true, "valid": true}
    }));

    let result = service(&providers)
        .validate(&email_request("test@mailinator.com"))
        .await;

    let email = result.email.unwrap();
    assert!(email.valid);
    assert!(email.disposable);
    assert_eq!(email.domain.as_deref(), Some("mailinator.com"));
    assert_eq!(result.score, 0);
}

#[tokio::test]
async fn test_phone_example_scores_100() {
    let providers = MockProviderClient::new().with_phone_reply(json!({
        "status": "ok",
        "data": {
            "formatted": {"international": "+15551234567"},
            "valid": true,
            "lineType": "mobile"
        }
    }));
    let request = ValidationRequest {
        phone: Some("5551234567".to_string()),
        country: Some("US".to_string()),
        ..Default::default()
    };

    let result = service(&providers).validate(&request).await;

    let phone = result.phone.unwrap();
    assert_eq!(phone.formatted.as_deref(), Some("+15551234567"));
    assert!(phone.valid);
    assert_eq!(phone.line_type, "mobile");
    assert_eq!(result.score, 100);
    assert_eq!(providers.last_country().as_deref(), Some("US"));
}

#[tokio::test]
async fn test_one_of_two_passing_scores_50() {
    let providers = MockProviderClient::new()
        .with_email_reply(good_email())
        .with_phone_reply(json!({"status": "ok", "data": {"valid": false}}));
    let request = ValidationRequest::new("a@b.com", "5551234567", "GB");

    let result = service(&providers).validate(&request).await;

    assert_eq!(result.score, 50);
    assert_eq!(providers.get_call_count("verify_email"), 1);
    assert_eq!(providers.get_call_count("verify_phone"), 1);
    assert_eq!(providers.last_country().as_deref(), Some("GB"));
}

#[tokio::test]
async fn test_failing_provider_is_isolated() {
    // No phone reply configured: the phone provider fails.
    let providers = MockProviderClient::new().with_email_reply(good_email());
    let request = ValidationRequest::new("a@b.com", "5551234567", "US");

    let result = service(&providers).validate(&request).await;

    let phone = result.phone.unwrap();
    assert!(!phone.valid);
    assert_eq!(phone.formatted, None);
    assert_eq!(phone.line_type, "Unknown");
    assert!(result.email.unwrap().valid);
    assert_eq!(result.score, 50);
}

#[tokio::test]
async fn test_malformed_provider_body_degrades() {
    let providers = MockProviderClient::new()
        .with_email_reply(json!(["not", "an", "envelope"]))
        .with_phone_reply(json!({"status": "error", "message": "quota exceeded"}));
    let request = ValidationRequest::new("a@b.com", "5551234567", "US");

    let result = service(&providers).validate(&request).await;

    let email = result.email.unwrap();
    assert!(!email.valid);
    assert_eq!(email.domain.as_deref(), Some("b.com"));
    assert!(!result.phone.unwrap().valid);
    assert_eq!(result.score, 0);
}

#[tokio::test]
async fn test_empty_request_makes_no_calls() {
    let providers = MockProviderClient::new();

    let result = service(&providers)
        .validate(&ValidationRequest::new("", "", "US"))
        .await;

    assert!(result.email.is_none());
    assert!(result.phone.is_none());
    assert_eq!(result.score, 0);
    assert_eq!(providers.total_calls(), 0);
}
