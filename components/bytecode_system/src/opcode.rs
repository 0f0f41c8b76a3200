//! Bytecode opcodes for the stack machine
//!
//! The opcode table is fixed and bit-exact: program encodings refer to
//! instructions by these numeric values.

use core_types::{Number, VmError};
use std::fmt;

/// Number of entries in the opcode table.
pub const OPCODE_COUNT: usize = 24;

/// Stack machine opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    // Stack manipulation
    /// No effect
    Nop = 0x00,
    /// Push the literal that follows in ROM
    Push = 0x01,
    /// Discard the top value
    Drop = 0x02,
    /// Duplicate the top value
    Dup = 0x03,
    /// Copy the second value over the top
    Over = 0x04,
    /// Exchange the top two values
    Swap = 0x05,

    // Memory access
    /// Replace an address with the value stored there
    Load = 0x06,
    /// Pop an address, then a value, and write the value there
    Store = 0x07,

    // Control flow
    /// Unconditional relative jump
    Jmp = 0x08,
    /// Jump if the operand is zero
    Jz = 0x09,
    /// Jump if the operand is not zero
    Jnz = 0x0A,
    /// Jump if the operands are equal
    Je = 0x0B,
    /// Jump if the first operand is greater
    Jg = 0x0C,
    /// Jump if the first operand is smaller
    Jl = 0x0D,
    /// Stop the machine
    Halt = 0x0E,

    // Output
    /// Emit the top value to the output sink
    Out = 0x0F,

    // Arithmetic and bitwise
    /// Addition
    Add = 0x10,
    /// Subtraction
    Sub = 0x11,
    /// Multiplication
    Mul = 0x12,
    /// Division
    Div = 0x13,
    /// Truncating remainder
    Mod = 0x14,
    /// 32-bit bitwise complement
    Not = 0x15,
    /// 32-bit bitwise and
    And = 0x16,
    /// 32-bit bitwise or
    Or = 0x17,
}

impl Opcode {
    /// Every opcode, indexed by its numeric value
    pub const ALL: [Opcode; OPCODE_COUNT] = [
        Opcode::Nop,
        Opcode::Push,
        Opcode::Drop,
        Opcode::Dup,
        Opcode::Over,
        Opcode::Swap,
        Opcode::Load,
        Opcode::Store,
        Opcode::Jmp,
        Opcode::Jz,
        Opcode::Jnz,
        Opcode::Je,
        Opcode::Jg,
        Opcode::Jl,
        Opcode::Halt,
        Opcode::Out,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Mod,
        Opcode::Not,
        Opcode::And,
        Opcode::Or,
    ];

    /// Decode a fetched number into an opcode
    ///
    /// Negative, fractional, non-finite, and out-of-table values are
    /// rejected with [`VmError::IllegalOpcode`].
    ///
    /// ```
    /// use bytecode_system::Opcode;
    /// use core_types::{ErrorKind, Number};
    ///
    /// assert_eq!(Opcode::decode(Number::from(0x10)).unwrap(), Opcode::Add);
    /// let err = Opcode::decode(Number::from(0x18)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::IllegalOpcode);
    /// ```
    pub fn decode(number: Number) -> Result<Opcode, VmError> {
        number
            .to_index()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(VmError::IllegalOpcode { opcode: number })
    }

    /// Numeric encoding of this opcode
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Push => "PUSH",
            Opcode::Drop => "DROP",
            Opcode::Dup => "DUP",
            Opcode::Over => "OVER",
            Opcode::Swap => "SWAP",
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Jmp => "JMP",
            Opcode::Jz => "JZ",
            Opcode::Jnz => "JNZ",
            Opcode::Je => "JE",
            Opcode::Jg => "JG",
            Opcode::Jl => "JL",
            Opcode::Halt => "HALT",
            Opcode::Out => "OUT",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Not => "NOT",
            Opcode::And => "AND",
            Opcode::Or => "OR",
        }
    }

    /// Look up an opcode by mnemonic, ignoring case
    pub fn from_mnemonic(text: &str) -> Option<Opcode> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }

    /// Number of literal operands that follow this opcode in ROM
    pub fn literal_count(self) -> usize {
        match self {
            Opcode::Push => 1,
            _ => 0,
        }
    }
}

impl From<Opcode> for Number {
    fn from(op: Opcode) -> Self {
        Number::from(i32::from(op.code()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
