//! Bytecode system for the stack machine
//!
//! This crate provides the instruction set definition and the program image
//! the machine executes.
//!
//! # Features
//!
//! - Fixed 24-entry opcode table with bit-exact encodings
//! - ROM cells that can carry non-numeric placeholders
//! - Text listing parser and disassembler
//!
//! # Example
//!
//! ```
//! use bytecode_system::{Opcode, Program};
//!
//! let mut program = Program::new();
//! program.emit_push(2);
//! program.emit_push(3);
//! program.emit(Opcode::Add);
//! program.emit(Opcode::Out);
//!
//! assert_eq!(program, Program::parse("0x01, 2, 0x01, 3, 0x10, 0x0F"));
//! print!("{}", program.disassembly());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod listing;
pub mod opcode;
pub mod program;
pub mod value;

// Re-export main types at crate root
pub use opcode::{Opcode, OPCODE_COUNT};
pub use program::{Disassembly, Program};
pub use value::Value;
