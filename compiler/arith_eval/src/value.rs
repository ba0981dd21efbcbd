//! Runtime numeric values.

use std::fmt;

/// The result of evaluating an expression: an exact integer or a
/// floating-point number.
///
/// Operations on two integers stay in the integer domain (division
/// only when it is exact); any operation touching a float promotes
/// the result to `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An exact integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
}

impl Value {
    /// Widens to `f64`; exact for floats, possibly rounded for very
    /// large integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(value) => value as f64,
            Value::Float(value) => value,
        }
    }

    /// True when the value is exactly zero, in either domain.
    pub fn is_zero(self) -> bool {
        match self {
            Value::Int(value) => value == 0,
            Value::Float(value) => value == 0.0,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
        }
    }
}
