//! Phone provider payload normalization.

use super::fields::{first_present, first_string, is_truthy, lookup, FieldPath};
use crate::client::ProviderResponse;
use crate::error::ProviderResult;
use crate::models::{PhoneResult, UNKNOWN_LINE_TYPE};
use serde_json::Value;

/// Nested and flat locations of the international format, after the
/// string-typed `formatted` field.
pub const INTERNATIONAL_FIELDS: &[FieldPath] =
    &[&["formatted", "international"], &["international"]];

/// Fields consulted for validity, in order.
pub const VALID_FIELDS: &[FieldPath] = &[&["valid"], &["isValid"]];

/// Fields consulted for the line type, in order.
pub const LINE_TYPE_FIELDS: &[FieldPath] = &[&["type"], &["lineType"]];

/// Fields consulted for the carrier name.
pub const CARRIER_FIELDS: &[FieldPath] = &[&["carrier"]];

/// Turn the phone provider outcome into a [`PhoneResult`].
///
/// When the provider sends neither `valid` nor `isValid`, a non-empty
/// formatted number is taken as validity.
pub fn normalize_phone(number: &str, outcome: ProviderResult<ProviderResponse>) -> PhoneResult {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Phone validation error: {}", e);
            return degraded(number);
        }
    };

    let Some(data) = response.ok_data() else {
        tracing::warn!(
            "Phone provider returned status {:?} without usable data",
            response.status
        );
        return degraded(number);
    };

    let formatted = formatted_number(data).unwrap_or_else(|| number.to_string());
    let valid = first_present(data, VALID_FIELDS)
        .map(is_truthy)
        .unwrap_or(!formatted.is_empty());

    PhoneResult {
        number: number.to_string(),
        valid,
        formatted: Some(formatted),
        line_type: first_string(data, LINE_TYPE_FIELDS)
            .unwrap_or_else(|| UNKNOWN_LINE_TYPE.to_string()),
        carrier: first_string(data, CARRIER_FIELDS),
    }
}

/// A string-typed `formatted` is used as-is, even when empty.
fn formatted_number(data: &Value) -> Option<String> {
    if let Some(Value::String(formatted)) = lookup(data, &["formatted"]) {
        return Some(formatted.clone());
    }
    first_string(data, INTERNATIONAL_FIELDS)
}

fn degraded(number: &str) -> PhoneResult {
    PhoneResult {
        number: number.to_string(),
        valid: false,
        formatted: None,
        line_type: UNKNOWN_LINE_TYPE.to_string(),
        carrier: None,
    }
}
