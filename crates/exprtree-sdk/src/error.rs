//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Deserialization error
    #[error("Parser error: {0}")]
    ParseError(#[from] exprtree_parser::ParseError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    EvaluationError(#[from] exprtree_core::CoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use exprtree_core::CoreError;
    use exprtree_parser::ParseError;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("max_depth must be at least 1".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("max_depth"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let error: SdkError = ParseError::UnknownExpressionType("loop".to_string()).into();
        assert_eq!(error.to_string(), "Parser error: Unknown expression type: loop");
    }

    #[test]
    fn test_evaluation_error_conversion() {
        let error: SdkError = CoreError::Custom("boom".to_string()).into();
        assert!(error.to_string().starts_with("Evaluation error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }
}
