//! Expression tree definitions
//!
//! This module contains the node definitions for:
//! - Constants (number, string, boolean leaves)
//! - Binary operations
//! - Blocks and if-then control flow
//! - Caller-defined custom nodes

pub mod constant;
pub mod custom;
pub mod expression;
pub mod operator;

pub use constant::Constant;
pub use custom::CustomExpression;
pub use expression::{
    BinaryExpression, BlockExpression, Expression, IfThenExpression, BINARY_TYPE, BLOCK_TYPE,
    CONSTANT_TYPE, IF_THEN_TYPE,
};
pub use operator::BinaryOperator;
