//! Machine fault types.
//!
//! Every fault is fatal: the cycle that raised it is aborted and the error is
//! handed to the run driver unchanged.

use crate::Number;
use thiserror::Error;

/// The kind of machine fault, without its diagnostic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A fetched ROM cell is not a number
    IllegalValue,
    /// A fetch ran past the end of ROM
    RomOverrun,
    /// A fetched opcode has no entry in the instruction table
    IllegalOpcode,
    /// A pop was attempted on an empty stack
    StackUnderflow,
    /// A memory access targeted an invalid address
    IllegalAddress,
    /// A jump target falls outside ROM
    IllegalJumpTarget,
}

/// A machine fault with the context needed to diagnose it.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, Number, VmError};
///
/// let error = VmError::IllegalAddress { address: Number::from(-1) };
///
/// assert_eq!(error.kind(), ErrorKind::IllegalAddress);
/// assert_eq!(error.to_string(), "illegal address '-1'");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VmError {
    /// The cell at `pc` holds something other than a number
    #[error("illegal value '{value}' at rom[{pc}]")]
    IllegalValue {
        /// ROM index of the offending cell
        pc: usize,
        /// Source text of the offending cell
        value: String,
    },

    /// The program counter points at or beyond the end of ROM
    #[error("fetch at rom[{pc}] is past the end of rom (length {len})")]
    RomOverrun {
        /// ROM index of the attempted fetch
        pc: usize,
        /// ROM length
        len: usize,
    },

    /// The opcode is negative, fractional, or past the instruction table
    #[error("illegal opcode '{opcode}'")]
    IllegalOpcode {
        /// The fetched opcode
        opcode: Number,
    },

    /// An instruction needed more operands than the stack holds
    #[error("popping from empty stack (needed {needed}, stack has {depth})")]
    StackUnderflow {
        /// Operands the instruction consumes
        needed: usize,
        /// Stack depth at the time of the pop
        depth: usize,
    },

    /// The address is negative
    #[error("illegal address '{address}'")]
    IllegalAddress {
        /// The rejected address
        address: Number,
    },

    /// The computed jump target is outside `[0, len)`
    #[error("illegal jump target '{target}' (rom length {len})")]
    IllegalJumpTarget {
        /// The computed target, `pc + offset`
        target: Number,
        /// ROM length
        len: usize,
    },
}

impl VmError {
    /// The kind of this fault.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VmError::IllegalValue { .. } => ErrorKind::IllegalValue,
            VmError::RomOverrun { .. } => ErrorKind::RomOverrun,
            VmError::IllegalOpcode { .. } => ErrorKind::IllegalOpcode,
            VmError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            VmError::IllegalAddress { .. } => ErrorKind::IllegalAddress,
            VmError::IllegalJumpTarget { .. } => ErrorKind::IllegalJumpTarget,
        }
    }
}

/// Result type for machine operations
pub type VmResult<T> = Result<T, VmError>;
