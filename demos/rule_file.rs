//! Rule file example
//!
//! Loads an engine configuration and a YAML rule from disk and evaluates it.
//!
//! Run with: cargo run --example rule_file -- demos/rules/engine.yaml demos/rules/discount.yaml

use exprtree_sdk::{EngineConfig, ExpressionEngineBuilder};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exprtree_sdk=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args
        .next()
        .unwrap_or_else(|| "demos/rules/engine.yaml".to_string());
    let rule_path = args
        .next()
        .unwrap_or_else(|| "demos/rules/discount.yaml".to_string());

    let config = EngineConfig::from_file(&config_path)?;
    println!("Config: {:?}", config);

    let engine = ExpressionEngineBuilder::new().with_config(config).build()?;
    let tree = engine.load_file(&rule_path)?;
    let result = engine.evaluate(&tree)?;

    println!("{} => {:?}", rule_path, result);
    Ok(())
}
