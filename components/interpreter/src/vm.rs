//! Machine for bytecode execution
//!
//! Owns one [`MachineState`] and an output sink and drives the
//! fetch-decode-execute cycle.

use bytecode_system::{Opcode, Program};
use core_types::{VmError, VmResult};
use thiserror::Error;
use tracing::{debug, trace};

use crate::dispatch;
use crate::output::OutputSink;
use crate::state::MachineState;

/// A run that stopped on a fatal error
///
/// Carries the state as it was when the error surfaced so callers can
/// inspect pc, stack and memory.
#[derive(Debug, Clone, Error)]
#[error("{error} (pc {pc})", pc = .state.pc())]
pub struct Fault {
    /// What went wrong
    pub error: VmError,
    /// State at the failure point
    pub state: MachineState,
}

/// Stack machine
///
/// # Example
///
/// ```
/// use bytecode_system::Program;
/// use core_types::Number;
/// use interpreter::Machine;
///
/// let program = Program::parse("PUSH 2 PUSH 3 ADD OUT");
/// let mut machine = Machine::new(program, Vec::<Number>::new());
/// machine.run().unwrap();
///
/// assert!(machine.state().is_halted());
/// assert_eq!(machine.output(), &vec![Number::from(5)]);
/// ```
#[derive(Debug)]
pub struct Machine<O: OutputSink> {
    state: MachineState,
    output: O,
    cycles: u64,
}

impl<O: OutputSink> Machine<O> {
    /// Create a machine ready to run `program`
    pub fn new(program: Program, output: O) -> Self {
        Self {
            state: MachineState::new(program),
            output,
            cycles: 0,
        }
    }

    /// Execute one cycle
    ///
    /// Returns whether the machine is still running afterwards. Stepping a
    /// halted machine does nothing.
    pub fn step(&mut self) -> VmResult<bool> {
        if self.state.halted {
            return Ok(false);
        }

        let pc = self.state.pc;
        let opcode = Opcode::decode(self.state.fetch()?)?;
        trace!(pc, %opcode, depth = self.state.stack.len(), "cycle");

        dispatch::execute(&mut self.state, opcode, &mut self.output)?;
        self.cycles += 1;

        if self.state.past_end() {
            self.state.halted = true;
        }
        Ok(!self.state.halted)
    }

    /// Run until the machine halts
    ///
    /// A program that neither halts nor runs off the end of ROM never
    /// returns.
    pub fn run(&mut self) -> VmResult<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => {
                    debug!(pc = self.state.pc, cycles = self.cycles, "machine halted");
                    return Ok(());
                }
                Err(error) => {
                    debug!(
                        pc = self.state.pc,
                        cycles = self.cycles,
                        %error,
                        "machine fault"
                    );
                    return Err(error);
                }
            }
        }
    }

    /// Current machine state
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// The output sink
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Cycles completed so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Take the machine apart
    pub fn into_parts(self) -> (MachineState, O) {
        (self.state, self.output)
    }
}

/// Run `program` to completion, writing OUT values to `output`
///
/// Returns the final state, or the error together with the state at the
/// moment it was raised.
pub fn compute<O>(program: Program, output: &mut O) -> Result<MachineState, Fault>
where
    O: OutputSink + ?Sized,
{
    let mut machine = Machine::new(program, output);
    let result = machine.run();
    let (state, _) = machine.into_parts();

    match result {
        Ok(()) => Ok(state),
        Err(error) => Err(Fault { error, state }),
    }
}
