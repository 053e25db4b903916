//! Extension point for node kinds the built-in model does not know

use crate::error::Result;
use crate::types::Value;
use std::fmt;

/// A user-defined expression node.
///
/// Custom nodes are usually produced by a deserializer fallback for a `type`
/// tag outside the built-in set, but they can also be constructed directly
/// and placed anywhere in a tree.
pub trait CustomExpression: fmt::Debug {
    /// Discriminator reported as this node's `type`
    fn type_tag(&self) -> &str;

    /// Evaluate the node. Side effects are allowed.
    fn evaluate(&self) -> Result<Value>;

    /// Serialized form of this node, if it has one
    fn to_serialized(&self) -> Option<serde_json::Value> {
        None
    }
}
