//! exprtree Core - expression model for the exprtree condition engine
//!
//! This crate provides the in-memory expression tree and its evaluation:
//! - Value types produced by evaluation
//! - Expression nodes (constants, binary operators, blocks, if-then, custom)
//! - Short-circuit evaluation with configurable comparison policy
//! - Condition extraction from if-then nodes
//! - Error types

pub mod ast;
pub mod error;
pub mod eval;
pub mod extract;
pub mod types;

// Re-export commonly used types
pub use ast::{
    BinaryExpression, BinaryOperator, BlockExpression, Constant, CustomExpression, Expression,
    IfThenExpression,
};
pub use error::{CoreError, Result};
pub use eval::{ComparisonPolicy, EvalOptions};
pub use extract::{parse, ExtractedIfThen};
pub use types::{Value, ValueType};
