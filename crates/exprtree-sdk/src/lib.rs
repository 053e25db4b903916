//! exprtree SDK
//!
//! High-level API for loading, extending and evaluating expression trees.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;

// Re-export main types
pub use builder::ExpressionEngineBuilder;
pub use config::EngineConfig;
pub use engine::ExpressionEngine;
pub use error::{Result, SdkError};
pub use registry::{NodeKey, NodeRegistry};

// Re-export commonly used types from dependencies
pub use exprtree_core::{ComparisonPolicy, CustomExpression, Expression, Value};
pub use exprtree_parser::{CustomDeserializer, ParseError};
