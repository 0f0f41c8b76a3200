//! Operand stack
//!
//! Values are pushed and popped from the tail. Depth is unbounded; popping
//! past the bottom is a fatal [`VmError::StackUnderflow`].

use arrayvec::ArrayVec;
use core_types::{Number, VmError, VmResult};
use serde::Serialize;

/// Most operands any instruction takes from the stack in one go
pub const MAX_OPERANDS: usize = 3;

/// Operands popped for a single instruction, in push order
pub type Operands = ArrayVec<Number, MAX_OPERANDS>;

/// LIFO container for intermediate values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OperandStack {
    values: Vec<Number>,
}

impl OperandStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            values: Vec::with_capacity(256),
        }
    }

    /// Push a value on top
    pub fn push(&mut self, value: Number) {
        self.values.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> VmResult<Number> {
        self.values.pop().ok_or(VmError::StackUnderflow {
            needed: 1,
            depth: 0,
        })
    }

    /// Remove the top `count` values and return them in push order
    ///
    /// The earliest pushed value comes first. Fails without touching the
    /// stack when fewer than `count` values are present. `count` must not
    /// exceed [`MAX_OPERANDS`].
    pub fn pop_many(&mut self, count: usize) -> VmResult<Operands> {
        let depth = self.values.len();
        if count > depth {
            return Err(VmError::StackUnderflow {
                needed: count,
                depth,
            });
        }

        let mut operands = Operands::new();
        operands.extend(self.values.drain(depth - count..));
        Ok(operands)
    }

    /// The top value, if any
    pub fn peek(&self) -> Option<Number> {
        self.values.last().copied()
    }

    /// Current depth
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stack contents, bottom first
    pub fn as_slice(&self) -> &[Number] {
        &self.values
    }
}
