//! ExpressionEngine - loads serialized trees and evaluates them

use crate::config::EngineConfig;
use crate::error::Result;
use crate::registry::NodeRegistry;
use exprtree_core::{Expression, Value};
use exprtree_parser::{deserialize_with, CustomDeserializer, ExpressionLoader};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Expression engine
///
/// Holds the configuration and the registry of custom node kinds. Trees it
/// loads are owned by the caller, who may mutate them between evaluations.
#[derive(Debug)]
pub struct ExpressionEngine {
    config: EngineConfig,
    registry: NodeRegistry,
}

impl ExpressionEngine {
    pub(crate) fn new(config: EngineConfig, registry: NodeRegistry) -> Self {
        Self { config, registry }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered custom node kinds
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    fn fallback(&self) -> Option<&dyn CustomDeserializer> {
        if self.registry.is_empty() {
            None
        } else {
            Some(&self.registry)
        }
    }

    /// Build a tree from a raw node
    pub fn load_value(&self, node: &JsonValue) -> Result<Expression> {
        let expr = deserialize_with(node, self.fallback(), &self.config.deserialize_options())?;
        tracing::debug!("Loaded expression of type '{}'", expr.type_tag());
        Ok(expr)
    }

    /// Build a tree from JSON text
    pub fn load_json(&self, json_str: &str) -> Result<Expression> {
        let node = ExpressionLoader::parse_json(json_str)?;
        self.load_value(&node)
    }

    /// Build a tree from YAML text
    pub fn load_yaml(&self, yaml_str: &str) -> Result<Expression> {
        let node = ExpressionLoader::parse_yaml(yaml_str)?;
        self.load_value(&node)
    }

    /// Build a tree from a file; `.json` files are read as JSON, anything else as YAML
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Expression> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loading expression from {}", path.display());

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => self.load_json(&content),
            _ => self.load_yaml(&content),
        }
    }

    /// Evaluate a tree with the configured comparison policy
    pub fn evaluate(&self, expr: &Expression) -> Result<Value> {
        let result = expr.evaluate_with(&self.config.eval_options());

        match &result {
            Ok(value) if self.config.log_evaluations => {
                tracing::info!("Evaluated '{}' => {:?}", expr.type_tag(), value)
            }
            Ok(value) => tracing::debug!("Evaluated '{}' => {:?}", expr.type_tag(), value),
            Err(e) => tracing::warn!("Evaluation of '{}' failed: {}", expr.type_tag(), e),
        }

        Ok(result?)
    }

    /// Load a tree from JSON text and evaluate it once
    pub fn load_and_evaluate_json(&self, json_str: &str) -> Result<Value> {
        let expr = self.load_json(json_str)?;
        self.evaluate(&expr)
    }
}
