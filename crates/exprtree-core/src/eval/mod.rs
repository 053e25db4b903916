//! Tree evaluation
//!
//! Evaluation is a synchronous recursive descent over owned children. Binary
//! nodes evaluate left before right, blocks evaluate in list order, and
//! `and`/`or` never touch their right operand once the left one decides the
//! result.

mod comparison;

use crate::ast::{
    BinaryExpression, BinaryOperator, BlockExpression, Expression, IfThenExpression,
};
use crate::error::Result;
use crate::types::Value;
use serde::{Deserialize, Serialize};

pub(crate) use comparison::execute_compare;

/// What comparison nodes do with operands that have no common ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonPolicy {
    /// Fail with `CoreError::IncomparableOperands`
    #[default]
    Strict,
    /// Evaluate to `false`
    Lenient,
}

/// Evaluation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub comparison: ComparisonPolicy,
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comparison(mut self, policy: ComparisonPolicy) -> Self {
        self.comparison = policy;
        self
    }
}

impl Expression {
    /// Evaluate with default options (strict comparisons)
    pub fn evaluate(&self) -> Result<Value> {
        self.evaluate_with(&EvalOptions::default())
    }

    /// Evaluate with explicit options
    pub fn evaluate_with(&self, options: &EvalOptions) -> Result<Value> {
        match self {
            Expression::Constant(constant) => Ok(constant.value()),
            Expression::Binary(binary) => binary.evaluate_with(options),
            Expression::Block(block) => block.evaluate_with(options),
            Expression::IfThen(if_then) => if_then.evaluate_with(options),
            Expression::Custom(node) => {
                tracing::trace!("Evaluating custom node '{}'", node.type_tag());
                node.evaluate()
            }
        }
    }
}

impl BinaryExpression {
    pub fn evaluate(&self) -> Result<Value> {
        self.evaluate_with(&EvalOptions::default())
    }

    pub fn evaluate_with(&self, options: &EvalOptions) -> Result<Value> {
        let left = self.left.evaluate_with(options)?;

        match self.op {
            BinaryOperator::And => {
                if !left.is_truthy() {
                    tracing::trace!("and: left operand {:?} is falsy, short-circuit", left);
                    return Ok(left);
                }
                self.right.evaluate_with(options)
            }
            BinaryOperator::Or => {
                if left.is_truthy() {
                    tracing::trace!("or: left operand {:?} is truthy, short-circuit", left);
                    return Ok(left);
                }
                self.right.evaluate_with(options)
            }
            op => {
                let right = self.right.evaluate_with(options)?;
                let result = execute_compare(&left, op, &right, options.comparison)?;
                tracing::trace!("{:?} {} {:?} => {}", left, op, right, result);
                Ok(Value::Bool(result))
            }
        }
    }
}

impl BlockExpression {
    pub fn evaluate(&self) -> Result<Value> {
        self.evaluate_with(&EvalOptions::default())
    }

    pub fn evaluate_with(&self, options: &EvalOptions) -> Result<Value> {
        tracing::trace!("Evaluating block of {} expressions", self.expressions.len());
        for expression in &self.expressions {
            expression.evaluate_with(options)?;
        }
        Ok(Value::Null)
    }
}

impl IfThenExpression {
    pub fn evaluate(&self) -> Result<Value> {
        self.evaluate_with(&EvalOptions::default())
    }

    pub fn evaluate_with(&self, options: &EvalOptions) -> Result<Value> {
        let check = self.condition.evaluate_with(options)?;
        if check.is_truthy() {
            tracing::debug!("if-then: condition {:?} holds, evaluating branch", check);
            self.then.evaluate_with(options)?;
        } else {
            tracing::debug!("if-then: condition {:?} does not hold", check);
        }
        Ok(Value::Null)
    }
}
