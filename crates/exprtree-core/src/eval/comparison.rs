//! Comparison operator execution

use super::ComparisonPolicy;
use crate::ast::BinaryOperator;
use crate::error::{CoreError, Result};
use crate::types::Value;

/// Execute a comparison operation on two evaluated operands
pub(crate) fn execute_compare(
    left: &Value,
    op: BinaryOperator,
    right: &Value,
    policy: ComparisonPolicy,
) -> Result<bool> {
    let outcome = match (left, op, right) {
        (Value::Number(l), BinaryOperator::Eq, Value::Number(r)) => Some(l == r),
        (Value::Number(l), BinaryOperator::Gt, Value::Number(r)) => Some(l > r),
        (Value::Number(l), BinaryOperator::Ge, Value::Number(r)) => Some(l >= r),
        (Value::Number(l), BinaryOperator::Lt, Value::Number(r)) => Some(l < r),
        (Value::Number(l), BinaryOperator::Le, Value::Number(r)) => Some(l <= r),

        (Value::String(l), BinaryOperator::Eq, Value::String(r)) => Some(l == r),
        (Value::Bool(l), BinaryOperator::Eq, Value::Bool(r)) => Some(l == r),

        _ => None,
    };

    match (outcome, policy) {
        (Some(result), _) => Ok(result),
        (None, ComparisonPolicy::Lenient) => {
            tracing::debug!(
                "Incomparable operands {:?} {} {:?}, returning false",
                left,
                op,
                right
            );
            Ok(false)
        }
        (None, ComparisonPolicy::Strict) => Err(CoreError::IncomparableOperands {
            op,
            left: left.clone(),
            right: right.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(left: Value, op: BinaryOperator, right: Value) -> Result<bool> {
        execute_compare(&left, op, &right, ComparisonPolicy::Strict)
    }

    #[test]
    fn test_number_ordering() {
        assert!(!strict(Value::Number(45.0), BinaryOperator::Gt, Value::Number(66.0)).unwrap());
        assert!(strict(Value::Number(45.0), BinaryOperator::Lt, Value::Number(66.0)).unwrap());
        assert!(strict(Value::Number(66.0), BinaryOperator::Ge, Value::Number(66.0)).unwrap());
        assert!(strict(Value::Number(66.0), BinaryOperator::Le, Value::Number(66.0)).unwrap());
        assert!(!strict(Value::Number(f64::NAN), BinaryOperator::Ge, Value::Number(1.0)).unwrap());
    }

    #[test]
    fn test_same_type_equality() {
        assert!(strict(Value::Number(3.0), BinaryOperator::Eq, Value::Number(3.0)).unwrap());
        assert!(strict(
            Value::String("tony".to_string()),
            BinaryOperator::Eq,
            Value::String("tony".to_string())
        )
        .unwrap());
        assert!(!strict(Value::Bool(true), BinaryOperator::Eq, Value::Bool(false)).unwrap());
    }

    #[test]
    fn test_strict_rejects_mixed_types() {
        let err = strict(Value::Number(1.0), BinaryOperator::Eq, Value::String("1".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::IncomparableOperands {
                op: BinaryOperator::Eq,
                ..
            }
        ));
    }

    #[test]
    fn test_strict_rejects_string_ordering() {
        let result = strict(
            Value::String("a".to_string()),
            BinaryOperator::Lt,
            Value::String("b".to_string()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_rejects_null() {
        assert!(strict(Value::Null, BinaryOperator::Eq, Value::Null).is_err());
    }

    #[test]
    fn test_lenient_returns_false() {
        let result = execute_compare(
            &Value::Bool(true),
            BinaryOperator::Gt,
            &Value::Number(0.0),
            ComparisonPolicy::Lenient,
        )
        .unwrap();
        assert!(!result);
    }
}
