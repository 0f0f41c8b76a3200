//! Bytecode interpreter for the stack machine
//!
//! This crate provides the machine that executes a [`Program`]:
//! - Operand stack and sparse application memory
//! - A 24-entry instruction table with declared arities
//! - The fetch-decode-execute cycle with explicit, fatal faults
//! - Pluggable output sinks for the OUT instruction
//!
//! # Example
//!
//! ```
//! use bytecode_system::Program;
//! use core_types::Number;
//! use interpreter::compute;
//!
//! let program = Program::from_numbers([0x01, 2, 0x01, 3, 0x10, 0x0F]);
//! let mut out: Vec<Number> = Vec::new();
//!
//! let state = compute(program, &mut out).unwrap();
//! assert!(state.is_halted());
//! assert_eq!(out, vec![Number::from(5)]);
//! ```
//!
//! [`Program`]: bytecode_system::Program

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod instruction;
pub mod memory;
pub mod output;
pub mod stack;
pub mod state;
pub mod vm;

// Re-export main types at crate root
pub use instruction::{semantics, Condition, Operation, Semantics, INSTRUCTION_TABLE};
pub use memory::Memory;
pub use output::{LogSink, OutputSink, WriterSink};
pub use stack::OperandStack;
pub use state::MachineState;
pub use vm::{compute, Fault, Machine};
