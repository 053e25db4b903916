//! exprtree Parser - serialized node schema to expression trees
//!
//! This crate turns the language-neutral node schema (JSON or YAML) into live
//! `exprtree_core::Expression` trees, with a caller-supplied fallback for
//! node kinds outside the built-in set, and serializes trees back.

pub mod deserializer;
pub mod error;
pub mod loader;
pub mod node;
pub mod serializer;

// Re-export main parser types
pub use deserializer::{
    deserialize, deserialize_with, CustomDeserializer, DeserializeOptions, DEFAULT_MAX_DEPTH,
};
pub use error::{ParseError, Result};
pub use loader::{from_json_str, from_yaml_str, ExpressionLoader};
pub use serializer::serialize;
