//! Configuration types for ExpressionEngine

use crate::error::{Result, SdkError};
use exprtree_core::{ComparisonPolicy, EvalOptions};
use exprtree_parser::{DeserializeOptions, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How comparisons treat operands of different types
    pub comparison: ComparisonPolicy,

    /// Maximum nesting depth accepted when loading trees
    pub max_depth: usize,

    /// Log every evaluation result at info level instead of debug
    pub log_evaluations: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            comparison: ComparisonPolicy::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
            log_evaluations: false,
        }
    }

    /// Set comparison policy
    pub fn with_comparison(mut self, policy: ComparisonPolicy) -> Self {
        self.comparison = policy;
        self
    }

    /// Set maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable evaluation logging
    pub fn with_log_evaluations(mut self, enable: bool) -> Self {
        self.log_evaluations = enable;
        self
    }

    /// Load configuration from YAML
    pub fn from_yaml_str(yaml_str: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml_str)
            .map_err(|e| SdkError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)
            .map_err(|e| SdkError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(SdkError::ConfigError(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Options passed to the evaluator
    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions::new().with_comparison(self.comparison)
    }

    /// Options passed to the deserializer
    pub fn deserialize_options(&self) -> DeserializeOptions {
        DeserializeOptions::default().with_max_depth(self.max_depth)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.comparison, ComparisonPolicy::Strict);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.log_evaluations);
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::new()
            .with_comparison(ComparisonPolicy::Lenient)
            .with_max_depth(8)
            .with_log_evaluations(true);

        assert_eq!(config.eval_options().comparison, ComparisonPolicy::Lenient);
        assert_eq!(config.deserialize_options().max_depth, 8);
        assert!(config.log_evaluations);
    }

    #[test]
    fn test_from_yaml_str() {
        let config = EngineConfig::from_yaml_str(
            r#"
comparison: lenient
max_depth: 32
"#,
        )
        .unwrap();

        assert_eq!(config.comparison, ComparisonPolicy::Lenient);
        assert_eq!(config.max_depth, 32);
        // Missing keys take defaults
        assert!(!config.log_evaluations);
    }

    #[test]
    fn test_from_json_str() {
        let config = EngineConfig::from_json_str(r#"{"log_evaluations": true}"#).unwrap();
        assert_eq!(config.comparison, ComparisonPolicy::Strict);
        assert!(config.log_evaluations);
    }

    #[test]
    fn test_rejects_zero_depth() {
        let err = EngineConfig::from_yaml_str("max_depth: 0").unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let err = EngineConfig::from_yaml_str("comparison: fuzzy").unwrap_err();
        assert!(matches!(err, SdkError::ConfigError(_)));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = EngineConfig::new().with_max_depth(10);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
