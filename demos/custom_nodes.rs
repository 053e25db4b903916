//! Custom node example
//!
//! This example demonstrates:
//! - Registering a node kind the built-in model does not know ("log")
//! - Using it as the outcome of an if-then rule
//! - Serializing the tree back to the node schema

use exprtree_sdk::{CustomExpression, Expression, ExpressionEngineBuilder, ParseError, Value};
use serde_json::{json, Value as JsonValue};

/// Prints a message when evaluated
#[derive(Debug)]
struct LogMessage {
    message: String,
}

impl CustomExpression for LogMessage {
    fn type_tag(&self) -> &str {
        "log"
    }

    fn evaluate(&self) -> exprtree_core::Result<Value> {
        println!("  [log] {}", self.message);
        Ok(Value::Null)
    }

    fn to_serialized(&self) -> Option<JsonValue> {
        Some(json!({"type": "log", "message": self.message}))
    }
}

fn log_node(node: &JsonValue) -> exprtree_parser::Result<Expression> {
    let message = node["message"]
        .as_str()
        .ok_or_else(|| ParseError::MissingField {
            field: "message".to_string(),
        })?;
    Ok(Expression::custom(LogMessage {
        message: message.to_string(),
    }))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Custom Node Example ===\n");

    let engine = ExpressionEngineBuilder::new()
        .register_node("log", log_node)
        .build()?;

    let rule = json!({
        "type": "if-then",
        "condition": {
            "type": "binary-expression",
            "op": "or",
            "left": {
                "type": "binary-expression",
                "op": "greater-than-or-equal",
                "left": {"type": "constant", "value": 1200, "valueType": "number"},
                "right": {"type": "constant", "value": 1000, "valueType": "number"}
            },
            "right": {"type": "log", "message": "never printed: or short-circuits"}
        },
        "then": {
            "type": "block",
            "expressions": [
                {"type": "log", "message": "amount above threshold"},
                {"type": "log", "message": "flagging for review"}
            ]
        }
    });

    let tree = engine.load_value(&rule)?;
    println!("Evaluating rule:");
    engine.evaluate(&tree)?;

    let serialized = exprtree_parser::serialize(&tree)?;
    println!("\nSerialized form:\n{}", serde_json::to_string_pretty(&serialized)?);

    Ok(())
}
