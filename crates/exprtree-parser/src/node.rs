//! Field access helpers for raw serialized nodes
//!
//! A raw node is a `serde_json::Value` object. YAML input is converted into
//! the same value model before dispatch, so these helpers serve both formats.

use crate::error::{ParseError, Result};
use serde_json::Value as JsonValue;
use std::borrow::Cow;

/// Field names of the serialized node schema
pub mod fields {
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const VALUE_TYPE: &str = "valueType";
    pub const OP: &str = "op";
    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const EXPRESSIONS: &str = "expressions";
    pub const CONDITION: &str = "condition";
    pub const THEN: &str = "then";
}

/// Raw node utilities
pub struct NodeReader;

impl NodeReader {
    /// Get a required string field
    pub fn get_str<'a>(node: &'a JsonValue, field: &str) -> Result<&'a str> {
        node.get(field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ParseError::MissingField {
                field: field.to_string(),
            })
    }

    /// Get a discriminator (`type`, `valueType`, `op`) as written in the node.
    ///
    /// A non-string value comes back as its JSON text so it can be reported
    /// as an unknown tag. `None` means the field is absent.
    pub fn get_tag<'a>(node: &'a JsonValue, field: &str) -> Option<Cow<'a, str>> {
        node.get(field).map(|value| match value.as_str() {
            Some(tag) => Cow::Borrowed(tag),
            None => Cow::Owned(value.to_string()),
        })
    }

    /// Error for a discriminator no handler recognizes
    pub fn unknown_tag(
        field: &str,
        tag: Option<&str>,
        unknown: impl FnOnce(String) -> ParseError,
    ) -> ParseError {
        match tag {
            Some(tag) => unknown(tag.to_string()),
            None => ParseError::MissingField {
                field: field.to_string(),
            },
        }
    }

    /// Get a required field of any shape
    pub fn get_field<'a>(node: &'a JsonValue, field: &str) -> Result<&'a JsonValue> {
        node.get(field).ok_or_else(|| ParseError::MissingField {
            field: field.to_string(),
        })
    }

    /// Get a required array field
    pub fn get_array<'a>(node: &'a JsonValue, field: &str) -> Result<&'a Vec<JsonValue>> {
        Self::get_field(node, field)?
            .as_array()
            .ok_or_else(|| ParseError::InvalidValue {
                field: field.to_string(),
                message: "expected an array".to_string(),
            })
    }

    /// Get a required number field
    pub fn get_f64(node: &JsonValue, field: &str) -> Result<f64> {
        let value = Self::get_field(node, field)?;
        value.as_f64().ok_or_else(|| Self::type_error(field, "a number", value))
    }

    /// Get a required boolean field
    pub fn get_bool(node: &JsonValue, field: &str) -> Result<bool> {
        let value = Self::get_field(node, field)?;
        value
            .as_bool()
            .ok_or_else(|| Self::type_error(field, "a boolean", value))
    }

    /// Get a required string field as an owned value, reporting mismatches as invalid values
    pub fn get_string_value(node: &JsonValue, field: &str) -> Result<String> {
        let value = Self::get_field(node, field)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Self::type_error(field, "a string", value))
    }

    fn type_error(field: &str, expected: &str, actual: &JsonValue) -> ParseError {
        ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("expected {}, got {}", expected, actual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_str() {
        let node = json!({"type": "constant"});
        assert_eq!(NodeReader::get_str(&node, "type").unwrap(), "constant");
        assert!(matches!(
            NodeReader::get_str(&node, "op"),
            Err(ParseError::MissingField { field }) if field == "op"
        ));
    }

    #[test]
    fn test_get_tag() {
        let node = json!({"type": "constant", "op": 5, "valueType": null});
        assert_eq!(NodeReader::get_tag(&node, "type").as_deref(), Some("constant"));
        assert_eq!(NodeReader::get_tag(&node, "op").as_deref(), Some("5"));
        assert_eq!(NodeReader::get_tag(&node, "valueType").as_deref(), Some("null"));
        assert_eq!(NodeReader::get_tag(&node, "left"), None);
    }

    #[test]
    fn test_unknown_tag() {
        let err = NodeReader::unknown_tag("op", Some("xor"), ParseError::UnknownBinaryOperator);
        assert!(matches!(err, ParseError::UnknownBinaryOperator(op) if op == "xor"));

        let err = NodeReader::unknown_tag("op", None, ParseError::UnknownBinaryOperator);
        assert!(matches!(err, ParseError::MissingField { field } if field == "op"));
    }

    #[test]
    fn test_get_f64_rejects_string() {
        let node = json!({"value": "45"});
        let err = NodeReader::get_f64(&node, "value").unwrap_err();
        match err {
            ParseError::InvalidValue { field, message } => {
                assert_eq!(field, "value");
                assert!(message.contains("expected a number"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_get_array_rejects_object() {
        let node = json!({"expressions": {}});
        assert!(matches!(
            NodeReader::get_array(&node, "expressions"),
            Err(ParseError::InvalidValue { .. })
        ));
    }
}
