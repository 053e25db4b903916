//! Text front-ends
//!
//! Reads JSON or YAML documents into the raw node model, then dispatches.

use crate::deserializer::{deserialize_with, CustomDeserializer, DeserializeOptions};
use crate::error::Result;
use exprtree_core::Expression;
use serde_json::Value as JsonValue;

/// Expression loader for serialized documents
pub struct ExpressionLoader;

impl ExpressionLoader {
    /// Read a JSON document into a raw node
    pub fn parse_json(json_str: &str) -> Result<JsonValue> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Read a YAML document into a raw node
    pub fn parse_yaml(yaml_str: &str) -> Result<JsonValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Deserialize an expression from JSON text
    pub fn from_json_str(
        json_str: &str,
        fallback: Option<&dyn CustomDeserializer>,
        options: &DeserializeOptions,
    ) -> Result<Expression> {
        let node = Self::parse_json(json_str)?;
        deserialize_with(&node, fallback, options)
    }

    /// Deserialize an expression from YAML text
    pub fn from_yaml_str(
        yaml_str: &str,
        fallback: Option<&dyn CustomDeserializer>,
        options: &DeserializeOptions,
    ) -> Result<Expression> {
        let node = Self::parse_yaml(yaml_str)?;
        deserialize_with(&node, fallback, options)
    }
}

/// Deserialize an expression from JSON text with default options
pub fn from_json_str(
    json_str: &str,
    fallback: Option<&dyn CustomDeserializer>,
) -> Result<Expression> {
    ExpressionLoader::from_json_str(json_str, fallback, &DeserializeOptions::default())
}

/// Deserialize an expression from YAML text with default options
pub fn from_yaml_str(
    yaml_str: &str,
    fallback: Option<&dyn CustomDeserializer>,
) -> Result<Expression> {
    ExpressionLoader::from_yaml_str(yaml_str, fallback, &DeserializeOptions::default())
}
