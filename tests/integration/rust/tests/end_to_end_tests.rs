//! End-to-end machine scenarios
//!
//! Whole-program behavior across the listing parser, the machine and the
//! fault reporting path.

use bytecode_system::Program;
use core_types::{ErrorKind, Number};
use interpreter::compute;
use proptest::prelude::*;

fn numbers(values: &[i32]) -> Vec<Number> {
    values.iter().map(|&v| Number::from(v)).collect()
}

#[test]
fn test_empty_program() {
    let mut out: Vec<Number> = Vec::new();
    let state = compute(Program::new(), &mut out).unwrap();

    assert!(state.is_halted());
    assert!(state.stack().is_empty());
    assert!(state.memory().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_add_then_halt() {
    let mut out: Vec<Number> = Vec::new();
    let state = compute(Program::from_numbers([0x01, 2, 0x01, 3, 0x10, 0x0F]), &mut out).unwrap();

    assert_eq!(out, numbers(&[5]));
    assert!(state.is_halted());
}

#[test]
fn test_fibonacci() {
    let mut out: Vec<Number> = Vec::new();
    compute(vm_cli::demo::fibonacci(), &mut out).unwrap();
    assert_eq!(out, numbers(&[1, 2, 3, 5, 8, 13, 21, 34, 55, 89]));
}

#[test]
fn test_sum_of_first_hundred() {
    // acc in [0], i in [1]; loop while i > 0
    let listing = "
        PUSH 100 PUSH 1 STORE
        PUSH 0 LOAD PUSH 1 LOAD ADD PUSH 0 STORE
        PUSH 1 LOAD PUSH 1 SUB DUP PUSH 1 STORE
        PUSH 0 PUSH -25 JG
        PUSH 0 LOAD OUT
    ";
    let mut out: Vec<Number> = Vec::new();
    compute(Program::parse(listing), &mut out).unwrap();
    assert_eq!(out, numbers(&[5050]));
}

#[test]
fn test_illegal_opcode_past_table() {
    let mut out: Vec<Number> = Vec::new();
    let fault = compute(Program::from_numbers([0x18]), &mut out).unwrap_err();
    assert_eq!(fault.error.kind(), ErrorKind::IllegalOpcode);
}

#[test]
fn test_jump_to_rom_length() {
    let mut out: Vec<Number> = Vec::new();
    let fault = compute(Program::parse("PUSH 0 JMP"), &mut out).unwrap_err();
    assert_eq!(fault.error.kind(), ErrorKind::IllegalJumpTarget);
    assert_eq!(fault.state.pc(), 3);
}

proptest! {
    /// Popping an empty stack fails whatever ran before.
    #[test]
    fn prop_underflow_after_any_balanced_prefix(values in prop::collection::vec(-1000i32..1000, 0..10)) {
        let mut program = Program::new();
        for &v in &values {
            program.emit_push(v);
        }
        for _ in &values {
            program.emit(bytecode_system::Opcode::Out);
        }
        program.emit(bytecode_system::Opcode::Drop);

        let mut out: Vec<Number> = Vec::new();
        let fault = compute(program, &mut out).unwrap_err();
        prop_assert_eq!(fault.error.kind(), ErrorKind::StackUnderflow);

        let reversed: Vec<Number> = values.iter().rev().map(|&v| Number::from(v)).collect();
        prop_assert_eq!(out, reversed);
    }

    /// AND of large values equals AND of their low 32 bits.
    #[test]
    fn prop_and_uses_low_32_bits(a in 0u64..(1u64 << 52), b in 0u64..(1u64 << 52)) {
        let mut program = Program::new();
        program.emit_push(a as f64);
        program.emit_push(b as f64);
        program.emit(bytecode_system::Opcode::And);

        let mut out: Vec<Number> = Vec::new();
        let state = compute(program, &mut out).unwrap();

        let expected = ((a as u32) & (b as u32)) as i32;
        prop_assert_eq!(state.stack().as_slice(), &[Number::from(expected)]);
    }
}
