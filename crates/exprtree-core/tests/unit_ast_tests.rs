//! Unit tests for expression tree types

use exprtree_core::ast::*;
use exprtree_core::extract::parse;
use exprtree_core::types::{Value, ValueType};

// =============================================================================
// Constant Tests
// =============================================================================

#[test]
fn test_expression_number_constant() {
    let expr = Expression::number(42.0);
    match expr {
        Expression::Constant(Constant::Number(n)) => assert_eq!(n, 42.0),
        _ => panic!("Expected number constant"),
    }
}

#[test]
fn test_expression_string_constant() {
    let expr = Expression::string("hello");
    match expr {
        Expression::Constant(Constant::String(s)) => assert_eq!(s, "hello"),
        _ => panic!("Expected string constant"),
    }
}

#[test]
fn test_expression_boolean_constant() {
    let expr = Expression::boolean(true);
    match expr {
        Expression::Constant(Constant::Boolean(b)) => assert!(b),
        _ => panic!("Expected boolean constant"),
    }
}

#[test]
fn test_constant_from_conversion() {
    let expr: Expression = Constant::Number(1.0).into();
    assert_eq!(expr.type_tag(), CONSTANT_TYPE);
    assert_eq!(expr.value_type(), Some(ValueType::Number));
}

// =============================================================================
// Binary Tests
// =============================================================================

#[test]
fn test_named_constructors_set_operator() {
    let cases = [
        (
            Expression::and(Expression::boolean(true), Expression::boolean(true)),
            BinaryOperator::And,
        ),
        (
            Expression::or(Expression::boolean(true), Expression::boolean(true)),
            BinaryOperator::Or,
        ),
        (
            Expression::equals(Expression::number(1.0), Expression::number(1.0)),
            BinaryOperator::Eq,
        ),
        (
            Expression::greater_than(Expression::number(1.0), Expression::number(1.0)),
            BinaryOperator::Gt,
        ),
        (
            Expression::less_than(Expression::number(1.0), Expression::number(1.0)),
            BinaryOperator::Lt,
        ),
        (
            Expression::greater_than_or_equal(Expression::number(1.0), Expression::number(1.0)),
            BinaryOperator::Ge,
        ),
        (
            Expression::less_than_or_equal(Expression::number(1.0), Expression::number(1.0)),
            BinaryOperator::Le,
        ),
    ];

    for (expr, op) in cases {
        assert_eq!(expr.type_tag(), BINARY_TYPE);
        assert_eq!(expr.op(), Some(op));
    }
}

#[test]
fn test_nested_binary_structure() {
    // (45 > 66) and ("tony" == "tony")
    let expr = Expression::and(
        Expression::greater_than(Expression::number(45.0), Expression::number(66.0)),
        Expression::equals(Expression::string("tony"), Expression::string("tony")),
    );

    let root = expr.as_binary().unwrap();
    assert_eq!(root.op, BinaryOperator::And);
    assert_eq!(root.left.op(), Some(BinaryOperator::Gt));
    assert_eq!(root.right.op(), Some(BinaryOperator::Eq));

    let equals = root.right.as_binary().unwrap();
    assert_eq!(equals.left.value_type(), Some(ValueType::String));
    assert_eq!(
        equals.left.as_constant().unwrap().value(),
        Value::String("tony".to_string())
    );
}

// =============================================================================
// Control Flow Tests
// =============================================================================

#[test]
fn test_block_construction() {
    let block = BlockExpression::new(Vec::new());
    assert!(block.expressions.is_empty());

    let expr: Expression = block.into();
    assert_eq!(expr.type_tag(), BLOCK_TYPE);
}

#[test]
fn test_if_then_construction() {
    let expr = Expression::if_then(
        Expression::boolean(false),
        Expression::block(vec![Expression::number(1.0)]),
    );

    let if_then = expr.as_if_then().unwrap();
    assert_eq!(if_then.condition.value_type(), Some(ValueType::Boolean));
    assert_eq!(if_then.then.type_tag(), BLOCK_TYPE);
    assert_eq!(expr.type_tag(), IF_THEN_TYPE);
}

// =============================================================================
// Extraction Tests
// =============================================================================

#[test]
fn test_parse_extracts_constant_condition() {
    let expr = IfThenExpression::new(
        Expression::boolean(false),
        Expression::block(vec![Expression::string("outcome")]),
    );

    let result = parse(&expr);
    assert_eq!(result.conditions.len(), 1);
    assert_eq!(
        result.conditions[0].as_constant(),
        Some(&Constant::Boolean(false))
    );
    assert!(result.outcomes.is_empty());
}
