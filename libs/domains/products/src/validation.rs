//! Field rules for product payloads.
//!
//! Validation runs on the raw JSON value so type mismatches (`"price": "ten"`)
//! are reported as field errors alongside every other violation instead of
//! failing deserialization on the first one.

use serde_json::{Map, Value};

use crate::error::{ProductError, ProductResult};
use crate::models::{ProductInput, ProductPatch};

/// Whether every field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Create and replace: all five fields required
    Full,
    /// Patch: only present fields are checked
    Partial,
}

/// Outcome of a validation pass: every violated rule, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> ProductResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ProductError::Validation(self.errors))
        }
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// Check `payload` against the product field rules.
///
/// Unknown fields are ignored. A payload that is not a JSON object is
/// treated as one with no fields.
pub fn validate_product(payload: &Value, mode: ValidationMode) -> ValidationReport {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    let mut check = |key: &str, ok: fn(&Value) -> bool, message: String| match fields.get(key) {
        Some(value) if ok(value) => {}
        None if mode == ValidationMode::Partial => {}
        _ => errors.push(message),
    };

    for key in ["name", "description"] {
        check(
            key,
            |v| non_empty_str(v).is_some(),
            format!("{key} must be a non-empty string"),
        );
    }
    check(
        "price",
        |v| finite_number(v).is_some(),
        "price must be a number".to_string(),
    );
    check(
        "category",
        |v| non_empty_str(v).is_some(),
        "category must be a non-empty string".to_string(),
    );
    check(
        "inStock",
        Value::is_boolean,
        "inStock must be a boolean".to_string(),
    );

    ValidationReport { errors }
}

impl ProductInput {
    /// Validate in full mode and build the typed body.
    pub fn from_payload(payload: &Value) -> ProductResult<Self> {
        validate_product(payload, ValidationMode::Full).into_result()?;

        let field = |key: &str| payload.get(key).unwrap_or(&Value::Null);
        let text = |key: &str| non_empty_str(field(key)).unwrap_or_default().to_string();

        Ok(Self {
            name: text("name"),
            description: text("description"),
            price: finite_number(field("price")).unwrap_or_default(),
            category: text("category"),
            in_stock: field("inStock").as_bool().unwrap_or_default(),
        })
    }
}

impl ProductPatch {
    /// Validate in partial mode and keep only the fields that were sent.
    pub fn from_payload(payload: &Value) -> ProductResult<Self> {
        validate_product(payload, ValidationMode::Partial).into_result()?;

        let text = |key: &str| payload.get(key).and_then(non_empty_str).map(str::to_string);

        Ok(Self {
            name: text("name"),
            description: text("description"),
            price: payload.get("price").and_then(finite_number),
            category: text("category"),
            in_stock: payload.get("inStock").and_then(Value::as_bool),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Desk Lamp",
            "description": "LED lamp",
            "price": 25.5,
            "category": "home",
            "inStock": true
        })
    }

    #[test]
    fn test_accepts_fully_typed_record() {
        let report = validate_product(&valid(), ValidationMode::Full);
        assert!(report.is_valid(), "{:?}", report.errors);
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let mut payload = valid();
        payload["color"] = json!("red");
        payload["id"] = json!(42);
        assert!(validate_product(&payload, ValidationMode::Full).is_valid());
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut payload = valid();
        payload["name"] = json!("   ");
        let report = validate_product(&payload, ValidationMode::Full);
        assert_eq!(report.errors, vec!["name must be a non-empty string"]);
    }

    #[test]
    fn test_rejects_non_numeric_price() {
        let mut payload = valid();
        payload["price"] = json!("ten");
        let report = validate_product(&payload, ValidationMode::Full);
        assert_eq!(report.errors, vec!["price must be a number"]);
    }

    #[test]
    fn test_rejects_non_boolean_in_stock() {
        let mut payload = valid();
        payload["inStock"] = json!("yes");
        let report = validate_product(&payload, ValidationMode::Full);
        assert_eq!(report.errors, vec!["inStock must be a boolean"]);
    }

    #[test]
    fn test_lists_every_violation_in_field_order() {
        let payload = json!({ "name": "", "price": null, "inStock": 1 });
        let report = validate_product(&payload, ValidationMode::Full);
        assert_eq!(
            report.errors,
            vec![
                "name must be a non-empty string",
                "description must be a non-empty string",
                "price must be a number",
                "category must be a non-empty string",
                "inStock must be a boolean",
            ]
        );
    }

    #[test]
    fn test_non_object_payload_fails_every_field() {
        let report = validate_product(&json!([1, 2, 3]), ValidationMode::Full);
        assert_eq!(report.errors.len(), 5);
    }

    #[test]
    fn test_partial_mode_checks_only_present_fields() {
        assert!(validate_product(&json!({}), ValidationMode::Partial).is_valid());
        assert!(validate_product(&json!({ "price": 10 }), ValidationMode::Partial).is_valid());

        let report = validate_product(&json!({ "category": "" }), ValidationMode::Partial);
        assert_eq!(report.errors, vec!["category must be a non-empty string"]);
    }

    #[test]
    fn test_partial_mode_rejects_explicit_null() {
        let report = validate_product(&json!({ "price": null }), ValidationMode::Partial);
        assert_eq!(report.errors, vec!["price must be a number"]);
    }

    #[test]
    fn test_input_from_payload_keeps_values() {
        let input = ProductInput::from_payload(&valid()).unwrap();
        assert_eq!(input.name, "Desk Lamp");
        assert_eq!(input.price, 25.5);
        assert!(input.in_stock);
    }

    #[test]
    fn test_input_from_payload_returns_validation_error() {
        let err = ProductInput::from_payload(&json!({ "name": "x" })).unwrap_err();
        match err {
            ProductError::Validation(errors) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_patch_from_payload_keeps_only_sent_fields() {
        let patch = ProductPatch::from_payload(&json!({ "price": 9, "inStock": false })).unwrap();
        assert_eq!(
            patch,
            ProductPatch {
                price: Some(9.0),
                in_stock: Some(false),
                ..Default::default()
            }
        );
    }
}
