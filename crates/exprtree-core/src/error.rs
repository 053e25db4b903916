//! Error types for exprtree core

use crate::ast::BinaryOperator;
use crate::types::Value;
use thiserror::Error;

/// Core error type, raised while evaluating or mutating a live tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Comparison or equality between values that have no common ordering
    #[error("Cannot apply '{op}' to {left:?} and {right:?}")]
    IncomparableOperands {
        op: BinaryOperator,
        left: Value,
        right: Value,
    },

    /// A constant was assigned a value of another type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Failure reported by a custom node
    #[error("Custom expression error: {0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
