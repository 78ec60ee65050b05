//! Ordered field-name fallbacks for provider payloads.

use serde_json::Value;

/// Path to a (possibly nested) field inside a provider payload.
pub type FieldPath = &'static [&'static str];

/// Resolve one path, treating JSON `null` as absent.
pub fn lookup<'a>(data: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = data;
    for key in path {
        current = current.get(key)?;
    }
    (!current.is_null()).then_some(current)
}

/// First path that resolves to a non-null value.
pub fn first_present<'a>(data: &'a Value, paths: &[FieldPath]) -> Option<&'a Value> {
    paths.iter().find_map(|path| lookup(data, path))
}

/// First path that resolves to a truthy value.
pub fn first_truthy<'a>(data: &'a Value, paths: &[FieldPath]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| lookup(data, path))
        .find(|value| is_truthy(value))
}

/// First path that resolves to a non-empty string.
pub fn first_string(data: &Value, paths: &[FieldPath]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| lookup(data, path))
        .find_map(|value| value.as_str().filter(|s| !s.is_empty()))
        .map(str::to_string)
}

/// Loose truthiness used for provider flags.
///
/// Providers are not consistent about sending booleans, so `0`, `""` and
/// `null` count as false and any other value counts as true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested() {
        let data = json!({"formatted": {"international": "+15551234567"}});
        assert_eq!(
            lookup(&data, &["formatted", "international"]),
            Some(&json!("+15551234567"))
        );
        assert_eq!(lookup(&data, &["formatted", "national"]), None);
        assert_eq!(lookup(&data, &["missing"]), None);
    }

    #[test]
    fn test_lookup_through_non_object() {
        let data = json!({"formatted": "+15551234567"});
        assert_eq!(lookup(&data, &["formatted", "international"]), None);
    }

    #[test]
    fn test_first_present_skips_null_not_false() {
        let data = json!({"valid": null, "isValid": false});
        assert_eq!(
            first_present(&data, &[&["valid"], &["isValid"]]),
            Some(&json!(false))
        );
    }

    #[test]
    fn test_first_truthy_skips_false() {
        let data = json!({"valid": false, "isValid": true});
        assert_eq!(
            first_truthy(&data, &[&["valid"], &["isValid"]]),
            Some(&json!(true))
        );
        let data = json!({"valid": false, "isValid": 0});
        assert_eq!(first_truthy(&data, &[&["valid"], &["isValid"]]), None);
    }

    #[test]
    fn test_first_string_ignores_empty_and_non_string() {
        let data = json!({"type": "", "lineType": 3, "kind": "mobile"});
        assert_eq!(
            first_string(&data, &[&["type"], &["lineType"], &["kind"]]),
            Some("mobile".to_string())
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!({})));
    }
}
