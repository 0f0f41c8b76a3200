//! Tests for the text listing parser

use bytecode_system::{listing, Opcode, Program, Value};

const FIBONACCI: &str = "
    // Initialize operands and counter, store into memory
    0x01, 10, 0x01, 0, 0x07,            // PUSH 10; PUSH 0; STORE
    0x01,  1, 0x01, 1, 0x07,            // PUSH  1; PUSH 1; STORE
    0x01,  1, 0x01, 2, 0x07,            // PUSH  1; PUSH 2; STORE

    // Load operands from memory into the stack
    0x01, 1, 0x06,                      // PUSH 1; LOAD
    0x01, 2, 0x06,                      // PUSH 2; LOAD
    0x04,                               // OVER
    0x10,                               // ADD
    0x03, 0x0F,                         // DUP; OUT
    0x01, 1, 0x07,                      // PUSH 1; STORE
    0x01, 2, 0x07,                      // PUSH 2; STORE

    0x01, 0, 0x06,                      // PUSH 0; LOAD
    0x01, 1, 0x11,                      // SUB 1
    0x03, 0x01, 0, 0x07,                // DUP; PUSH 0; STORE
    0x01, -29, 0x0A,                    // PUSH -29; JNZ
";

#[test]
fn test_parse_reference_listing() {
    let program = listing::parse(FIBONACCI);
    assert_eq!(program.len(), 44);
    assert_eq!(program.get(0), Some(&Value::from(Opcode::Push)));
    assert_eq!(program.get(42), Some(&Value::from(-29)));
    assert_eq!(program.get(43), Some(&Value::from(Opcode::Jnz)));
    assert!(program.cells().iter().all(Value::is_number));
}

#[test]
fn test_parse_mnemonic_listing_matches_numeric() {
    let mnemonic = Program::parse(
        "PUSH 10 PUSH 0 STORE
         PUSH 0 LOAD OUT",
    );
    let numeric = Program::parse("0x01 10 0x01 0 0x07 0x01 0 0x06 0x0F");
    assert_eq!(mnemonic, numeric);
}

#[test]
fn test_parse_hash_comments() {
    let program = Program::parse("# header\nNOP # trailing\nHALT");
    assert_eq!(program, Program::from_numbers([0x00, 0x0E]));
}

#[test]
fn test_parse_unknown_token_is_label() {
    let program = Program::parse("PUSH 1 PUHS 2");
    assert_eq!(program.get(2), Some(&Value::Label("PUHS".to_string())));
}
