//! Simple condition example
//!
//! This example demonstrates:
//! - Loading a serialized condition with the ExpressionEngine
//! - Evaluating it and mutating a constant between evaluations
//! - Extracting the guard of an if-then node
//!
//! Run with: RUST_LOG=debug cargo run --example simple_condition

use exprtree_core::extract::parse;
use exprtree_sdk::{ExpressionEngineBuilder, Value};

const RULE: &str = r#"{
    "type": "if-then",
    "condition": {"type": "constant", "value": false, "valueType": "boolean"},
    "then": {
        "type": "block",
        "expressions": [
            {
                "type": "binary-expression",
                "op": "greater-than",
                "left": {"type": "constant", "value": 45, "valueType": "number"},
                "right": {"type": "constant", "value": 66, "valueType": "number"}
            }
        ]
    }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exprtree_sdk=info,exprtree_core=info".into()),
        )
        .init();

    println!("=== Simple Condition Example ===\n");

    let engine = ExpressionEngineBuilder::new().log_evaluations(true).build()?;
    let mut tree = engine.load_json(RULE)?;
    println!("Loaded tree of type '{}'", tree.type_tag());

    let result = engine.evaluate(&tree)?;
    println!("First evaluation: {:?}", result);

    if let Some(if_then) = tree.as_if_then_mut() {
        if let Some(condition) = if_then.condition.as_constant_mut() {
            condition.set_boolean(true)?;
        }
    }
    let result = engine.evaluate(&tree)?;
    println!("After flipping the condition: {:?}", result);
    assert_eq!(result, Value::Null);

    if let Some(if_then) = tree.as_if_then() {
        let extracted = parse(if_then);
        println!("\nExtracted conditions:");
        for condition in &extracted.conditions {
            println!("  {:?}", condition);
        }
    }

    Ok(())
}
