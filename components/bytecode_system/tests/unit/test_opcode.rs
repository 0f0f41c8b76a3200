//! Tests for Opcode decoding and metadata

use bytecode_system::{Opcode, OPCODE_COUNT};
use core_types::{ErrorKind, Number};

#[test]
fn test_decode_every_table_entry() {
    for code in 0..OPCODE_COUNT as i32 {
        let op = Opcode::decode(Number::from(code)).unwrap();
        assert_eq!(i32::from(op.code()), code);
    }
}

#[test]
fn test_decode_first_value_past_table() {
    let err = Opcode::decode(Number::from(0x18)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalOpcode);
}

#[test]
fn test_decode_negative_opcode() {
    let err = Opcode::decode(Number::from(-1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalOpcode);
}

#[test]
fn test_decode_fractional_opcode() {
    let err = Opcode::decode(Number::new(0.5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalOpcode);
}

#[test]
fn test_decode_negative_zero_is_nop() {
    assert_eq!(Opcode::decode(Number::new(-0.0)).unwrap(), Opcode::Nop);
}

#[test]
fn test_push_is_only_opcode_with_literal() {
    for op in Opcode::ALL {
        let expected = if op == Opcode::Push { 1 } else { 0 };
        assert_eq!(op.literal_count(), expected, "{}", op);
    }
}

#[test]
fn test_opcode_display() {
    assert_eq!(Opcode::Jnz.to_string(), "JNZ");
    assert_eq!(Opcode::Store.to_string(), "STORE");
}

#[test]
fn test_opcode_into_number() {
    assert_eq!(Number::from(Opcode::Or), Number::from(0x17));
}
