//! Operators for binary expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
///
/// The serde names are the `op` tags of the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinaryOperator {
    // Logical operators
    /// Logical AND with short-circuit
    And,
    /// Logical OR with short-circuit
    Or,

    // Comparison operators
    /// Same-type equality
    #[serde(rename = "equals")]
    Eq,
    /// Greater than (>)
    #[serde(rename = "greater-than")]
    Gt,
    /// Less than (<)
    #[serde(rename = "less-than")]
    Lt,
    /// Greater than or equal (>=)
    #[serde(rename = "greater-than-or-equal")]
    Ge,
    /// Less than or equal (<=)
    #[serde(rename = "less-than-or-equal")]
    Le,
}

impl BinaryOperator {
    /// All operators, in wire-tag order
    pub const ALL: [BinaryOperator; 7] = [
        BinaryOperator::Eq,
        BinaryOperator::And,
        BinaryOperator::Or,
        BinaryOperator::Gt,
        BinaryOperator::Lt,
        BinaryOperator::Ge,
        BinaryOperator::Le,
    ];

    /// The `op` tag for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::Eq => "equals",
            BinaryOperator::Gt => "greater-than",
            BinaryOperator::Lt => "less-than",
            BinaryOperator::Ge => "greater-than-or-equal",
            BinaryOperator::Le => "less-than-or-equal",
        }
    }

    /// Look up an `op` tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == tag)
    }

    /// Returns true if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Eq
                | BinaryOperator::Gt
                | BinaryOperator::Lt
                | BinaryOperator::Ge
                | BinaryOperator::Le
        )
    }

    /// Returns true if this is a logical operator
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tags() {
        for op in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_tag(op.as_str()), Some(op));
        }
        assert_eq!(BinaryOperator::from_tag("xor"), None);
        assert_eq!(BinaryOperator::from_tag("Equals"), None);
    }

    #[test]
    fn test_operator_serde_names_match_tags() {
        for op in BinaryOperator::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.as_str()));
        }
    }

    #[test]
    fn test_operator_is_comparison() {
        assert!(BinaryOperator::Eq.is_comparison());
        assert!(BinaryOperator::Gt.is_comparison());
        assert!(BinaryOperator::Le.is_comparison());
        assert!(!BinaryOperator::And.is_comparison());
        assert!(!BinaryOperator::Or.is_comparison());
    }

    #[test]
    fn test_operator_is_logical() {
        assert!(BinaryOperator::And.is_logical());
        assert!(BinaryOperator::Or.is_logical());
        assert!(!BinaryOperator::Eq.is_logical());
        assert!(!BinaryOperator::Ge.is_logical());
    }
}
