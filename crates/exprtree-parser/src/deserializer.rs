//! Serialized node → live expression dispatcher
//!
//! Dispatch is keyed by `type`, then by `valueType` for constants and by `op`
//! for binary expressions. Children are built before their parent. Whatever
//! the built-in tags do not cover is handed, untouched, to the caller's
//! `CustomDeserializer` if one is supplied.

use crate::error::{ParseError, Result};
use crate::node::{fields, NodeReader};
use exprtree_core::ast::{BINARY_TYPE, BLOCK_TYPE, CONSTANT_TYPE, IF_THEN_TYPE};
use exprtree_core::{BinaryOperator, Expression, ValueType};
use serde_json::Value as JsonValue;

/// Default nesting limit for [`DeserializeOptions`]
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Fallback strategy for node kinds the dispatcher does not recognize.
///
/// Receives the raw serialized node and must return a complete expression or
/// fail. Its errors reach the caller unchanged.
pub trait CustomDeserializer {
    fn deserialize(&self, node: &JsonValue) -> Result<Expression>;
}

impl<F> CustomDeserializer for F
where
    F: Fn(&JsonValue) -> Result<Expression>,
{
    fn deserialize(&self, node: &JsonValue) -> Result<Expression> {
        self(node)
    }
}

/// Deserialization options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeserializeOptions {
    /// Maximum nesting depth, counting the root as depth 1
    pub max_depth: usize,
}

impl Default for DeserializeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DeserializeOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Build an expression from a serialized node with default options
pub fn deserialize(
    node: &JsonValue,
    fallback: Option<&dyn CustomDeserializer>,
) -> Result<Expression> {
    deserialize_with(node, fallback, &DeserializeOptions::default())
}

/// Build an expression from a serialized node
pub fn deserialize_with(
    node: &JsonValue,
    fallback: Option<&dyn CustomDeserializer>,
    options: &DeserializeOptions,
) -> Result<Expression> {
    Dispatcher { fallback, options }.dispatch(node, 1)
}

struct Dispatcher<'a> {
    fallback: Option<&'a dyn CustomDeserializer>,
    options: &'a DeserializeOptions,
}

impl Dispatcher<'_> {
    fn dispatch(&self, node: &JsonValue, depth: usize) -> Result<Expression> {
        if depth > self.options.max_depth {
            return Err(ParseError::MaxDepthExceeded(self.options.max_depth));
        }

        let node_type = NodeReader::get_tag(node, fields::TYPE);
        match node_type.as_deref() {
            Some(CONSTANT_TYPE) => self.constant(node),
            Some(BINARY_TYPE) => self.binary(node, depth),
            Some(BLOCK_TYPE) => self.block(node, depth),
            Some(IF_THEN_TYPE) => self.if_then(node, depth),
            other => self.fall_back(node, || {
                NodeReader::unknown_tag(fields::TYPE, other, ParseError::UnknownExpressionType)
            }),
        }
    }

    fn constant(&self, node: &JsonValue) -> Result<Expression> {
        let value_type = NodeReader::get_tag(node, fields::VALUE_TYPE);

        match value_type.as_deref().and_then(ValueType::from_tag) {
            Some(ValueType::Boolean) => Ok(Expression::boolean(NodeReader::get_bool(
                node,
                fields::VALUE,
            )?)),
            Some(ValueType::Number) => Ok(Expression::number(NodeReader::get_f64(
                node,
                fields::VALUE,
            )?)),
            Some(ValueType::String) => Ok(Expression::string(NodeReader::get_string_value(
                node,
                fields::VALUE,
            )?)),
            None => self.fall_back(node, || {
                NodeReader::unknown_tag(
                    fields::VALUE_TYPE,
                    value_type.as_deref(),
                    ParseError::UnknownConstantType,
                )
            }),
        }
    }

    fn binary(&self, node: &JsonValue, depth: usize) -> Result<Expression> {
        let left = self.dispatch(NodeReader::get_field(node, fields::LEFT)?, depth + 1)?;
        let right = self.dispatch(NodeReader::get_field(node, fields::RIGHT)?, depth + 1)?;

        let op = NodeReader::get_tag(node, fields::OP);
        match op.as_deref().and_then(BinaryOperator::from_tag) {
            Some(op) => Ok(Expression::binary(left, op, right)),
            None => self.fall_back(node, || {
                NodeReader::unknown_tag(fields::OP, op.as_deref(), ParseError::UnknownBinaryOperator)
            }),
        }
    }

    fn block(&self, node: &JsonValue, depth: usize) -> Result<Expression> {
        let expressions = NodeReader::get_array(node, fields::EXPRESSIONS)?
            .iter()
            .map(|child| self.dispatch(child, depth + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(Expression::block(expressions))
    }

    fn if_then(&self, node: &JsonValue, depth: usize) -> Result<Expression> {
        let condition = self.dispatch(NodeReader::get_field(node, fields::CONDITION)?, depth + 1)?;
        let then = self.dispatch(NodeReader::get_field(node, fields::THEN)?, depth + 1)?;

        Ok(Expression::if_then(condition, then))
    }

    /// Hand `node` to the fallback, or fail with `unknown()` when there is none
    fn fall_back(
        &self,
        node: &JsonValue,
        unknown: impl FnOnce() -> ParseError,
    ) -> Result<Expression> {
        match self.fallback {
            Some(fallback) => {
                log::debug!(
                    "Deferring node of type {:?} to custom deserializer",
                    node.get(fields::TYPE)
                );
                fallback.deserialize(node)
            }
            None => {
                let error = unknown();
                log::warn!("Cannot deserialize node: {}", error);
                Err(error)
            }
        }
    }
}
