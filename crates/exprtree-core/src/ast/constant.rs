//! Constant leaf nodes

use crate::error::{CoreError, Result};
use crate::types::{Value, ValueType};

/// Literal leaf. The variant fixes the `valueType`; the payload stays mutable.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Number(f64),
    String(String),
    Boolean(bool),
}

impl Constant {
    /// The fixed `valueType` tag of this leaf
    pub fn value_type(&self) -> ValueType {
        match self {
            Constant::Number(_) => ValueType::Number,
            Constant::String(_) => ValueType::String,
            Constant::Boolean(_) => ValueType::Boolean,
        }
    }

    /// Current value
    pub fn value(&self) -> Value {
        match self {
            Constant::Number(n) => Value::Number(*n),
            Constant::String(s) => Value::String(s.clone()),
            Constant::Boolean(b) => Value::Bool(*b),
        }
    }

    /// Replace the value, keeping the leaf's type
    pub fn set(&mut self, value: Value) -> Result<()> {
        match (self, value) {
            (Constant::Number(slot), Value::Number(n)) => *slot = n,
            (Constant::String(slot), Value::String(s)) => *slot = s,
            (Constant::Boolean(slot), Value::Bool(b)) => *slot = b,
            (this, other) => {
                return Err(CoreError::TypeMismatch {
                    expected: this.value_type().to_string(),
                    actual: other.type_name().to_string(),
                })
            }
        }
        Ok(())
    }

    pub fn set_number(&mut self, n: f64) -> Result<()> {
        self.set(Value::Number(n))
    }

    pub fn set_string(&mut self, s: impl Into<String>) -> Result<()> {
        self.set(Value::String(s.into()))
    }

    pub fn set_boolean(&mut self, b: bool) -> Result<()> {
        self.set(Value::Bool(b))
    }
}
