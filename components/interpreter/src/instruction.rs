//! Instruction semantics table
//!
//! Every opcode maps to one [`Semantics`] entry. Stack-shaping and
//! arithmetic instructions are an [`Operation`] (declared arity, declared
//! result count, pure function); control flow is a [`Condition`] applied by
//! the branch combinator. Entries are indexed by opcode value, so the table
//! order is part of the encoding.

use crate::stack::{Operands, MAX_OPERANDS};
use bytecode_system::{Opcode, OPCODE_COUNT};
use core_types::Number;

/// Values an operation pushes back, in push order
pub type Results = Operands;

/// A pure stack transformation
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Operands popped, presented to `apply` in push order
    pub arity: usize,
    /// Values pushed back
    pub results: usize,
    /// The transformation
    pub apply: fn(&[Number]) -> Results,
}

/// A branch predicate
///
/// The offset is popped separately; `arity` counts only the values the
/// predicate looks at.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    /// Operands popped after the offset, presented in push order
    pub arity: usize,
    /// Whether to take the branch
    pub test: fn(&[Number]) -> bool,
}

/// What an opcode does
#[derive(Debug, Clone, Copy)]
pub enum Semantics {
    /// No effect
    Nop,
    /// Push the literal in the next ROM cell
    Push,
    /// Replace an address with the value stored there
    Load,
    /// Pop an address, then a value, and write the value
    Store,
    /// Stop the machine
    Halt,
    /// Pop a value and emit it
    Out,
    /// Pop, transform, push
    Operate(Operation),
    /// Pop an offset, test a condition, maybe jump
    Branch(Condition),
}

/// Semantics of every opcode, indexed by opcode value
pub const INSTRUCTION_TABLE: [Semantics; OPCODE_COUNT] = [
    Semantics::Nop,
    Semantics::Push,
    operate(1, 0, discard),
    operate(1, 2, duplicate),
    operate(2, 3, over),
    operate(2, 2, swap),
    Semantics::Load,
    Semantics::Store,
    branch(0, always),
    branch(1, is_zero),
    branch(1, is_nonzero),
    branch(2, equal),
    branch(2, greater),
    branch(2, less),
    Semantics::Halt,
    Semantics::Out,
    operate(2, 1, add),
    operate(2, 1, sub),
    operate(2, 1, mul),
    operate(2, 1, div),
    operate(2, 1, rem),
    operate(1, 1, not),
    operate(2, 1, and),
    operate(2, 1, or),
];

/// Look up the semantics of an opcode
pub fn semantics(opcode: Opcode) -> Semantics {
    INSTRUCTION_TABLE[usize::from(opcode.code())]
}

const fn operate(arity: usize, results: usize, apply: fn(&[Number]) -> Results) -> Semantics {
    assert!(arity <= MAX_OPERANDS && results <= MAX_OPERANDS);
    Semantics::Operate(Operation {
        arity,
        results,
        apply,
    })
}

const fn branch(arity: usize, test: fn(&[Number]) -> bool) -> Semantics {
    assert!(arity < MAX_OPERANDS);
    Semantics::Branch(Condition { arity, test })
}

fn results<const N: usize>(values: [Number; N]) -> Results {
    values.into_iter().collect()
}

// Stack shaping

fn discard(_: &[Number]) -> Results {
    Results::new()
}

fn duplicate(v: &[Number]) -> Results {
    results([v[0], v[0]])
}

fn over(v: &[Number]) -> Results {
    results([v[0], v[1], v[0]])
}

fn swap(v: &[Number]) -> Results {
    results([v[1], v[0]])
}

// Arithmetic

fn add(v: &[Number]) -> Results {
    results([v[0] + v[1]])
}

fn sub(v: &[Number]) -> Results {
    results([v[0] - v[1]])
}

fn mul(v: &[Number]) -> Results {
    results([v[0] * v[1]])
}

fn div(v: &[Number]) -> Results {
    results([v[0] / v[1]])
}

fn rem(v: &[Number]) -> Results {
    results([v[0] % v[1]])
}

// Bitwise, on 32-bit two's complement

fn not(v: &[Number]) -> Results {
    results([!v[0]])
}

fn and(v: &[Number]) -> Results {
    results([v[0] & v[1]])
}

fn or(v: &[Number]) -> Results {
    results([v[0] | v[1]])
}

// Branch conditions

fn always(_: &[Number]) -> bool {
    true
}

fn is_zero(v: &[Number]) -> bool {
    v[0].is_zero()
}

fn is_nonzero(v: &[Number]) -> bool {
    !v[0].is_zero()
}

fn equal(v: &[Number]) -> bool {
    v[0] == v[1]
}

fn greater(v: &[Number]) -> bool {
    v[0] > v[1]
}

fn less(v: &[Number]) -> bool {
    v[0] < v[1]
}
