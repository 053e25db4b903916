//! Live expression → serialized node

use crate::error::{ParseError, Result};
use crate::node::fields;
use exprtree_core::ast::{BINARY_TYPE, BLOCK_TYPE, CONSTANT_TYPE, IF_THEN_TYPE};
use exprtree_core::{Constant, Expression};
use serde_json::{json, Value as JsonValue};

/// Serialize an expression into the node schema accepted by `deserialize`.
///
/// Custom nodes use their own `to_serialized` form and fail with
/// `NotSerializable` when they have none.
pub fn serialize(expr: &Expression) -> Result<JsonValue> {
    match expr {
        Expression::Constant(constant) => {
            let value = match constant {
                Constant::Number(n) if !n.is_finite() => {
                    return Err(ParseError::InvalidValue {
                        field: fields::VALUE.to_string(),
                        message: format!("{} has no JSON representation", n),
                    })
                }
                Constant::Number(n) => json!(n),
                Constant::String(s) => json!(s),
                Constant::Boolean(b) => json!(b),
            };
            Ok(json!({
                (fields::TYPE): CONSTANT_TYPE,
                (fields::VALUE): value,
                (fields::VALUE_TYPE): constant.value_type().as_str(),
            }))
        }
        Expression::Binary(binary) => Ok(json!({
            (fields::TYPE): BINARY_TYPE,
            (fields::OP): binary.op.as_str(),
            (fields::LEFT): serialize(&binary.left)?,
            (fields::RIGHT): serialize(&binary.right)?,
        })),
        Expression::Block(block) => {
            let expressions = block
                .expressions
                .iter()
                .map(serialize)
                .collect::<Result<Vec<_>>>()?;
            Ok(json!({
                (fields::TYPE): BLOCK_TYPE,
                (fields::EXPRESSIONS): expressions,
            }))
        }
        Expression::IfThen(if_then) => Ok(json!({
            (fields::TYPE): IF_THEN_TYPE,
            (fields::CONDITION): serialize(&if_then.condition)?,
            (fields::THEN): serialize(&if_then.then)?,
        })),
        Expression::Custom(node) => node
            .to_serialized()
            .ok_or_else(|| ParseError::NotSerializable(node.type_tag().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_greater_than() {
        let expr = Expression::greater_than(Expression::number(45.0), Expression::number(66.0));
        let node = serialize(&expr).unwrap();

        assert_eq!(
            node,
            json!({
                "type": "binary-expression",
                "op": "greater-than",
                "left": {"type": "constant", "value": 45.0, "valueType": "number"},
                "right": {"type": "constant", "value": 66.0, "valueType": "number"},
            })
        );
    }

    #[test]
    fn test_serialize_rejects_non_finite_numbers() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let expr = Expression::and(Expression::boolean(true), Expression::number(n));
            let err = serialize(&expr).unwrap_err();
            assert!(matches!(err, ParseError::InvalidValue { field, .. } if field == "value"));
        }
    }

    #[test]
    fn test_serialize_if_then_block() {
        let expr = Expression::if_then(
            Expression::boolean(false),
            Expression::block(vec![Expression::string("done")]),
        );
        let node = serialize(&expr).unwrap();

        assert_eq!(node["type"], "if-then");
        assert_eq!(node["condition"]["valueType"], "boolean");
        assert_eq!(node["then"]["type"], "block");
        assert_eq!(node["then"]["expressions"][0]["value"], "done");
    }
}
