//! Machine state
//!
//! Everything one run of the machine owns: the ROM it executes, the program
//! counter, application memory, the operand stack and the halted flag. A
//! single value of this type is threaded by reference through every
//! instruction.

use crate::memory::Memory;
use crate::stack::OperandStack;
use bytecode_system::Program;
use core_types::{Number, VmError, VmResult};
use serde::Serialize;

/// Complete state of one machine
///
/// Serializes to a diagnostic snapshot. The ROM is not part of the
/// snapshot; it never changes during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineState {
    #[serde(skip)]
    rom: Program,
    pub(crate) pc: usize,
    pub(crate) halted: bool,
    pub(crate) stack: OperandStack,
    pub(crate) memory: Memory,
}

impl MachineState {
    /// Create the initial state for a program
    ///
    /// An empty program starts out halted.
    pub fn new(rom: Program) -> Self {
        let halted = rom.is_empty();
        Self {
            rom,
            pc: 0,
            halted,
            stack: OperandStack::new(),
            memory: Memory::new(),
        }
    }

    /// Read the ROM cell at `pc` as a number and advance `pc`
    ///
    /// A non-numeric cell still consumes its slot before failing.
    pub fn fetch(&mut self) -> VmResult<Number> {
        let pc = self.pc;
        let cell = self.rom.get(pc).ok_or(VmError::RomOverrun {
            pc,
            len: self.rom.len(),
        })?;
        self.pc += 1;

        cell.as_number().ok_or_else(|| VmError::IllegalValue {
            pc,
            value: cell.to_string(),
        })
    }

    /// Move `pc` by a signed relative offset
    ///
    /// The target must be a whole ROM index; fractional targets are rejected
    /// here rather than at the next fetch.
    pub fn jump(&mut self, offset: Number) -> VmResult<()> {
        let len = self.rom.len();
        let target = Number::new(self.pc as f64) + offset;

        match target
            .to_index()
            .and_then(|index| usize::try_from(index).ok())
            .filter(|&index| index < len)
        {
            Some(index) => {
                self.pc = index;
                Ok(())
            }
            None => Err(VmError::IllegalJumpTarget { target, len }),
        }
    }

    /// The program being executed
    pub fn rom(&self) -> &Program {
        &self.rom
    }

    /// Index of the next ROM cell to fetch
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Check if the machine has stopped
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The operand stack
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    /// Application memory
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub(crate) fn past_end(&self) -> bool {
        self.pc >= self.rom.len()
    }
}
