//! Runtime type system for exprtree

pub mod value;

pub use value::{Value, ValueType};
