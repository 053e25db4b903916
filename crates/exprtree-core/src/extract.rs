//! Condition/outcome extraction from if-then nodes
//!
//! `parse` pulls the guard of an if-then node into a flat list so tools built
//! on the model (rule editors, explainers) can inspect conditions without
//! walking the tree themselves.

use crate::ast::{Expression, IfThenExpression};

/// Flattened view of an if-then node
#[derive(Debug, Default)]
pub struct ExtractedIfThen<'a> {
    pub conditions: Vec<&'a Expression>,
    pub outcomes: Vec<&'a Expression>,
}

/// Signature shared by extraction functions
pub type ExtractIfThenFn = for<'a> fn(&'a IfThenExpression) -> ExtractedIfThen<'a>;

/// Extract the condition of `expr`.
///
/// Non-binary conditions are pushed as-is. Binary conditions are left out and
/// `outcomes` stays empty.
pub fn parse(expr: &IfThenExpression) -> ExtractedIfThen<'_> {
    let mut result = ExtractedIfThen::default();

    match expr.condition.as_ref() {
        Expression::Binary(binary) => {
            // TODO: flatten and/or chains guarding the same outcome into parallel lists
            tracing::debug!(
                "parse: binary condition '{}' is not flattened yet",
                binary.op
            );
        }
        condition => result.conditions.push(condition),
    }

    result
}
