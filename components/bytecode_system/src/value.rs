//! ROM cell representation
//!
//! A program is a sequence of cells. Most cells hold numbers; a listing may
//! also leave symbolic placeholders behind, which the machine rejects when
//! it fetches them.

use crate::opcode::Opcode;
use core_types::Number;
use std::fmt;

/// A single ROM cell
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Opcode or literal operand
    Number(Number),
    /// Non-numeric placeholder, kept verbatim from the source listing
    Label(String),
}

impl Value {
    /// Check if the cell holds a number
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Try to get the number value
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Label(_) => None,
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Value::Number(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(Number::new(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(Number::from(number))
    }
}

impl From<Opcode> for Value {
    fn from(op: Opcode) -> Self {
        Value::Number(Number::from(op))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Label(text) => f.write_str(text),
        }
    }
}
