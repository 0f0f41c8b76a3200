//! Instruction execution
//!
//! Runs the semantics of one decoded opcode against the machine state.
//! Operand fetches for PUSH happen here, after the opcode itself was
//! fetched by the cycle.

use crate::instruction::{semantics, Condition, Operation, Semantics};
use crate::output::OutputSink;
use crate::state::MachineState;
use bytecode_system::Opcode;
use core_types::VmResult;
use tracing::trace;

/// Execute one instruction
pub fn execute<O>(state: &mut MachineState, opcode: Opcode, output: &mut O) -> VmResult<()>
where
    O: OutputSink + ?Sized,
{
    match semantics(opcode) {
        Semantics::Nop => {}
        Semantics::Push => {
            let literal = state.fetch()?;
            state.stack.push(literal);
        }
        Semantics::Load => {
            let address = state.stack.pop()?;
            let value = state.memory.load(address)?;
            state.stack.push(value);
        }
        Semantics::Store => {
            let address = state.stack.pop()?;
            let value = state.stack.pop()?;
            state.memory.store(address, value)?;
        }
        Semantics::Halt => state.halted = true,
        Semantics::Out => {
            let value = state.stack.pop()?;
            output.emit(value);
        }
        Semantics::Operate(operation) => operate(state, operation)?,
        Semantics::Branch(condition) => branch(state, condition)?,
    }
    Ok(())
}

/// Pop `arity` operands, apply the operation, push its results in order
fn operate(state: &mut MachineState, operation: Operation) -> VmResult<()> {
    let operands = state.stack.pop_many(operation.arity)?;
    for value in (operation.apply)(&operands) {
        state.stack.push(value);
    }
    Ok(())
}

/// Pop the offset, then the condition's operands; jump when it holds
fn branch(state: &mut MachineState, condition: Condition) -> VmResult<()> {
    let offset = state.stack.pop()?;
    let operands = state.stack.pop_many(condition.arity)?;

    if (condition.test)(&operands) {
        let from = state.pc;
        state.jump(offset)?;
        trace!(from, to = state.pc, "branch taken");
    }
    Ok(())
}
