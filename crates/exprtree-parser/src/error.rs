//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// Top-level `type` not recognized and no fallback supplied
    #[error("Unknown expression type: {0}")]
    UnknownExpressionType(String),

    /// `valueType` of a constant not recognized and no fallback supplied
    #[error("Unknown constant type: {0}")]
    UnknownConstantType(String),

    /// `op` of a binary expression not recognized and no fallback supplied
    #[error("Unknown binary operator: {0}")]
    UnknownBinaryOperator(String),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Nesting exceeds the configured depth limit
    #[error("Expression nesting exceeds maximum depth of {0}")]
    MaxDepthExceeded(usize),

    /// Custom node without a serialized form
    #[error("Expression type '{0}' cannot be serialized")]
    NotSerializable(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Failure reported by a custom deserializer
    #[error("Custom deserializer error: {0}")]
    Custom(String),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
