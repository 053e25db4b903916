//! Registry of caller-defined node kinds
//!
//! The registry is the engine's fallback. Handlers are keyed by the raw
//! node's `type`; unknown constant types and unknown operators can be
//! registered separately since those nodes carry a built-in `type`.

use exprtree_core::ast::{BINARY_TYPE, CONSTANT_TYPE};
use exprtree_core::Expression;
use exprtree_parser::node::{fields, NodeReader};
use exprtree_parser::{CustomDeserializer, ParseError};
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// What a handler is registered for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Top-level `type`
    Type(String),
    /// `valueType` of a constant node
    ConstantType(String),
    /// `op` of a binary node
    Operator(String),
}

impl NodeKey {
    /// Key a raw node would be looked up by.
    ///
    /// Fails with `MissingField` naming the absent discriminator, the same
    /// error the dispatcher reports when it has no fallback.
    fn of(node: &JsonValue) -> Result<Self, ParseError> {
        let tag = |field: &str| {
            NodeReader::get_tag(node, field)
                .map(Cow::into_owned)
                .ok_or_else(|| ParseError::MissingField {
                    field: field.to_string(),
                })
        };

        match tag(fields::TYPE)?.as_str() {
            CONSTANT_TYPE => tag(fields::VALUE_TYPE).map(NodeKey::ConstantType),
            BINARY_TYPE => tag(fields::OP).map(NodeKey::Operator),
            other => Ok(NodeKey::Type(other.to_string())),
        }
    }

    /// Error reported when nothing is registered under this key
    fn unknown(self) -> ParseError {
        match self {
            NodeKey::Type(t) => ParseError::UnknownExpressionType(t),
            NodeKey::ConstantType(t) => ParseError::UnknownConstantType(t),
            NodeKey::Operator(op) => ParseError::UnknownBinaryOperator(op),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Type(t) => write!(f, "type '{}'", t),
            NodeKey::ConstantType(t) => write!(f, "valueType '{}'", t),
            NodeKey::Operator(op) => write!(f, "op '{}'", op),
        }
    }
}

/// Custom node handlers
#[derive(Default)]
pub struct NodeRegistry {
    handlers: HashMap<NodeKey, Box<dyn CustomDeserializer>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for the same key
    pub fn register(&mut self, key: NodeKey, handler: impl CustomDeserializer + 'static) {
        if self.handlers.insert(key.clone(), Box::new(handler)).is_some() {
            tracing::warn!("Replacing custom deserializer for {}", key);
        }
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl CustomDeserializer for NodeRegistry {
    fn deserialize(&self, node: &JsonValue) -> exprtree_parser::Result<Expression> {
        let key = NodeKey::of(node)?;

        match self.handlers.get(&key) {
            Some(handler) => {
                tracing::debug!("Resolving custom node with handler for {}", key);
                handler.deserialize(node)
            }
            None => Err(key.unknown()),
        }
    }
}

impl fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRegistry")
            .field("keys", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
