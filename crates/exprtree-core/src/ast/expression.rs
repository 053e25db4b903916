//! Expression tree nodes

use super::constant::Constant;
use super::custom::CustomExpression;
use super::operator::BinaryOperator;
use crate::types::ValueType;

/// `type` tag of constant nodes
pub const CONSTANT_TYPE: &str = "constant";
/// `type` tag of binary nodes
pub const BINARY_TYPE: &str = "binary-expression";
/// `type` tag of block nodes
pub const BLOCK_TYPE: &str = "block";
/// `type` tag of if-then nodes
pub const IF_THEN_TYPE: &str = "if-then";

/// Expression tree node
///
/// Every child is owned by its parent; trees have no sharing and no
/// back-references. Child slots are public so callers can swap subtrees.
#[derive(Debug)]
pub enum Expression {
    /// Literal leaf
    Constant(Constant),

    /// Operator applied to two children
    Binary(BinaryExpression),

    /// Ordered sequence evaluated for its side effects
    Block(BlockExpression),

    /// Evaluates `then` when `condition` is truthy
    IfThen(IfThenExpression),

    /// Node kind supplied by the caller
    Custom(Box<dyn CustomExpression>),
}

/// Binary operation
#[derive(Debug)]
pub struct BinaryExpression {
    pub op: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Sequential block
#[derive(Debug, Default)]
pub struct BlockExpression {
    pub expressions: Vec<Expression>,
}

/// Conditional execution
#[derive(Debug)]
pub struct IfThenExpression {
    pub condition: Box<Expression>,
    pub then: Box<Expression>,
}

impl BinaryExpression {
    pub fn new(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl BlockExpression {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Self { expressions }
    }
}

impl IfThenExpression {
    pub fn new(condition: Expression, then: Expression) -> Self {
        Self {
            condition: Box::new(condition),
            then: Box::new(then),
        }
    }
}

impl Expression {
    // ---- constants ----

    /// Create a number constant
    pub fn number(value: f64) -> Self {
        Expression::Constant(Constant::Number(value))
    }

    /// Create a string constant
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Constant(Constant::String(value.into()))
    }

    /// Create a boolean constant
    pub fn boolean(value: bool) -> Self {
        Expression::Constant(Constant::Boolean(value))
    }

    // ---- binary ----

    /// Create a binary expression
    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(BinaryExpression::new(left, op, right))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::And, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Or, right)
    }

    pub fn equals(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Eq, right)
    }

    pub fn greater_than(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Gt, right)
    }

    pub fn less_than(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Lt, right)
    }

    pub fn greater_than_or_equal(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Ge, right)
    }

    pub fn less_than_or_equal(left: Expression, right: Expression) -> Self {
        Self::binary(left, BinaryOperator::Le, right)
    }

    // ---- control flow ----

    /// Create a block over `expressions`, evaluated in order
    pub fn block(expressions: Vec<Expression>) -> Self {
        Expression::Block(BlockExpression::new(expressions))
    }

    /// Create an if-then expression
    pub fn if_then(condition: Expression, then: Expression) -> Self {
        Expression::IfThen(IfThenExpression::new(condition, then))
    }

    /// Wrap a caller-defined node
    pub fn custom(node: impl CustomExpression + 'static) -> Self {
        Expression::Custom(Box::new(node))
    }

    // ---- discriminators ----

    /// The node's `type` discriminator
    pub fn type_tag(&self) -> &str {
        match self {
            Expression::Constant(_) => CONSTANT_TYPE,
            Expression::Binary(_) => BINARY_TYPE,
            Expression::Block(_) => BLOCK_TYPE,
            Expression::IfThen(_) => IF_THEN_TYPE,
            Expression::Custom(node) => node.type_tag(),
        }
    }

    /// The `valueType` tag, for constant nodes
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Expression::Constant(c) => Some(c.value_type()),
            _ => None,
        }
    }

    /// The `op` tag, for binary nodes
    pub fn op(&self) -> Option<BinaryOperator> {
        match self {
            Expression::Binary(b) => Some(b.op),
            _ => None,
        }
    }

    // ---- accessors ----

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Expression::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_constant_mut(&mut self) -> Option<&mut Constant> {
        match self {
            Expression::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpression> {
        match self {
            Expression::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_binary_mut(&mut self) -> Option<&mut BinaryExpression> {
        match self {
            Expression::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockExpression> {
        match self {
            Expression::Block(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_if_then(&self) -> Option<&IfThenExpression> {
        match self {
            Expression::IfThen(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_if_then_mut(&mut self) -> Option<&mut IfThenExpression> {
        match self {
            Expression::IfThen(i) => Some(i),
            _ => None,
        }
    }
}

impl From<Constant> for Expression {
    fn from(c: Constant) -> Self {
        Expression::Constant(c)
    }
}

impl From<BinaryExpression> for Expression {
    fn from(b: BinaryExpression) -> Self {
        Expression::Binary(b)
    }
}

impl From<BlockExpression> for Expression {
    fn from(b: BlockExpression) -> Self {
        Expression::Block(b)
    }
}

impl From<IfThenExpression> for Expression {
    fn from(i: IfThenExpression) -> Self {
        Expression::IfThen(i)
    }
}
