//! Tests for Program construction and disassembly

use bytecode_system::{Opcode, Program, Value};

#[test]
fn test_program_from_cells() {
    let program = Program::from_cells(vec![Value::from(Opcode::Halt)]);
    assert_eq!(program.len(), 1);
    assert_eq!(program.get(0), Some(&Value::from(0x0E)));
}

#[test]
fn test_program_collect_from_values() {
    let program: Program = [1i32, 5, 15].into_iter().map(Value::from).collect();
    assert_eq!(program, Program::from_numbers([1, 5, 15]));
}

#[test]
fn test_program_from_float_numbers() {
    let program = Program::from_numbers([1.0, 2.5]);
    assert_eq!(program.get(1), Some(&Value::from(2.5)));
}

#[test]
fn test_disassemble_empty_program() {
    assert_eq!(Program::new().disassemble(), "");
}

#[test]
fn test_disassemble_branching_program() {
    let mut program = Program::new();
    program.emit_push(1);
    program.emit_push(-4);
    program.emit(Opcode::Jnz);
    program.emit(Opcode::Halt);

    assert_eq!(
        program.disassemble(),
        "0000  PUSH 1\n0002  PUSH -4\n0004  JNZ\n0005  HALT\n"
    );
}

#[test]
fn test_disassemble_fractional_literal() {
    let program = Program::from_numbers([1.0, 0.25, 15.0]);
    assert_eq!(program.disassemble(), "0000  PUSH 0.25\n0002  OUT\n");
}
