//! Builder pattern for ExpressionEngine

use crate::config::EngineConfig;
use crate::engine::ExpressionEngine;
use crate::error::Result;
use crate::registry::{NodeKey, NodeRegistry};
use exprtree_core::ComparisonPolicy;
use exprtree_parser::CustomDeserializer;

/// Builder for ExpressionEngine
///
/// # Example
///
/// ```rust,ignore
/// use exprtree_sdk::{ComparisonPolicy, ExpressionEngineBuilder};
///
/// let engine = ExpressionEngineBuilder::new()
///     .comparison_policy(ComparisonPolicy::Lenient)
///     .register_node("timer", |node: &serde_json::Value| parse_timer(node))
///     .build()?;
///
/// let tree = engine.load_json(json)?;
/// let value = engine.evaluate(&tree)?;
/// ```
#[derive(Debug, Default)]
pub struct ExpressionEngineBuilder {
    config: EngineConfig,
    registry: NodeRegistry,
}

impl ExpressionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set comparison policy
    pub fn comparison_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.config.comparison = policy;
        self
    }

    /// Set maximum nesting depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Enable evaluation logging
    pub fn log_evaluations(mut self, enable: bool) -> Self {
        self.config.log_evaluations = enable;
        self
    }

    /// Register a handler for a top-level `type`
    pub fn register_node(
        mut self,
        type_tag: impl Into<String>,
        handler: impl CustomDeserializer + 'static,
    ) -> Self {
        self.registry.register(NodeKey::Type(type_tag.into()), handler);
        self
    }

    /// Register a handler for a constant `valueType`
    pub fn register_constant_type(
        mut self,
        value_type: impl Into<String>,
        handler: impl CustomDeserializer + 'static,
    ) -> Self {
        self.registry
            .register(NodeKey::ConstantType(value_type.into()), handler);
        self
    }

    /// Register a handler for a binary `op`
    pub fn register_operator(
        mut self,
        op: impl Into<String>,
        handler: impl CustomDeserializer + 'static,
    ) -> Self {
        self.registry.register(NodeKey::Operator(op.into()), handler);
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<ExpressionEngine> {
        self.config.validate()?;
        tracing::debug!(
            "Building expression engine: {:?}, {} custom node kinds",
            self.config,
            self.registry.len()
        );
        Ok(ExpressionEngine::new(self.config, self.registry))
    }
}
