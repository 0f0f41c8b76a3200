//! Unit tests for VmError and ErrorKind

use core_types::{ErrorKind, Number, VmError};

#[cfg(test)]
mod vm_error_tests {
    use super::*;

    #[test]
    fn test_stack_underflow_message() {
        let error = VmError::StackUnderflow {
            needed: 2,
            depth: 1,
        };
        assert_eq!(
            error.to_string(),
            "popping from empty stack (needed 2, stack has 1)"
        );
        assert_eq!(error.kind(), ErrorKind::StackUnderflow);
    }

    #[test]
    fn test_rom_overrun_message() {
        let error = VmError::RomOverrun { pc: 4, len: 4 };
        assert_eq!(
            error.to_string(),
            "fetch at rom[4] is past the end of rom (length 4)"
        );
        assert_eq!(error.kind(), ErrorKind::RomOverrun);
    }

    #[test]
    fn test_illegal_address_message() {
        let error = VmError::IllegalAddress {
            address: Number::new(1.5),
        };
        assert_eq!(error.to_string(), "illegal address '1.5'");
    }

    #[test]
    fn test_vm_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(VmError::IllegalOpcode {
            opcode: Number::from(-1),
        });
        assert_eq!(error.to_string(), "illegal opcode '-1'");
    }

    #[test]
    fn test_vm_error_clone_and_eq() {
        let error = VmError::IllegalJumpTarget {
            target: Number::from(10),
            len: 10,
        };
        assert_eq!(error.clone(), error);
    }
}
