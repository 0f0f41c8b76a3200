//! Runtime orchestration for program execution
//!
//! The Runtime loads a listing, optionally prints its disassembly, runs it
//! on a fresh machine with OUT values going to the given writer, and
//! optionally prints the final state.

use crate::cli::{Cli, ProgramSource};
use crate::demo;
use crate::error::{CliError, CliResult};
use bytecode_system::{Opcode, Program};
use interpreter::{compute, Fault, Machine, MachineState, OutputSink, WriterSink};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Runs programs on behalf of the CLI
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    /// Whether to print the disassembly before running
    disassemble: bool,
    /// Whether to log every cycle
    trace: bool,
    /// Whether to print the final state as JSON
    dump_state: bool,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Example
    /// ```
    /// use vm_cli::Runtime;
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// Runtime::new().execute_source("PUSH 2 PUSH 3 ADD OUT", &mut out).unwrap();
    /// assert_eq!(out, b"5\n");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runtime configured from command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_disassemble(cli.disassemble)
            .with_trace(cli.trace)
            .with_dump_state(cli.dump_state)
    }

    /// Enable disassembly printing
    pub fn with_disassemble(mut self, enabled: bool) -> Self {
        self.disassemble = enabled;
        self
    }

    /// Enable per-cycle tracing
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Enable the final state dump
    pub fn with_dump_state(mut self, enabled: bool) -> Self {
        self.dump_state = enabled;
        self
    }

    /// Check if per-cycle tracing is on
    pub fn is_tracing(&self) -> bool {
        self.trace
    }

    /// Run whatever the arguments point at
    pub fn execute_cli<W: Write>(&self, cli: &Cli, out: &mut W) -> CliResult<MachineState> {
        match cli.source() {
            ProgramSource::File(path) => self.execute_file(&path, out),
            ProgramSource::Inline(listing) => self.execute_source(&listing, out),
            ProgramSource::Demo => {
                info!("no program given, running the Fibonacci demo");
                self.execute(demo::fibonacci(), out)
            }
        }
    }

    /// Run a listing file
    ///
    /// # Errors
    /// Returns `CliError::Read` if the file cannot be read, or
    /// `CliError::Vm` if the machine faults.
    pub fn execute_file<W: Write>(&self, path: &Path, out: &mut W) -> CliResult<MachineState> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded listing");

        self.execute_source(&source, out)
    }

    /// Run a listing given as text
    pub fn execute_source<W: Write>(&self, source: &str, out: &mut W) -> CliResult<MachineState> {
        self.execute(Program::parse(source), out)
    }

    /// Run a program, writing OUT values to `out` one per line
    pub fn execute<W: Write>(&self, program: Program, out: &mut W) -> CliResult<MachineState> {
        debug!(cells = program.len(), "running program");

        if self.disassemble {
            write!(out, "{}", program.disassembly())?;
            writeln!(out)?;
        }

        let state = {
            let mut sink = WriterSink::new(&mut *out);
            let result = if self.is_tracing() {
                run_traced(program, &mut sink)
            } else {
                compute(program, &mut sink)
            };
            debug!(values = sink.emitted(), "program finished");
            result?
        };

        if self.dump_state {
            writeln!(out, "{}", state_json(&state)?)?;
        }
        out.flush()?;

        Ok(state)
    }
}

/// Pretty JSON snapshot of a machine state
pub fn state_json(state: &MachineState) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Step the machine one cycle at a time, reporting each cycle
fn run_traced<O: OutputSink>(program: Program, output: &mut O) -> Result<MachineState, Fault> {
    let mut machine = Machine::new(program, output);

    loop {
        let state = machine.state();
        let pc = state.pc();
        let opcode = state
            .rom()
            .get(pc)
            .and_then(|cell| cell.as_number())
            .and_then(|n| Opcode::decode(n).ok());

        match machine.step() {
            Ok(running) => {
                let state = machine.state();
                info!(
                    target: "stackvm::trace",
                    pc,
                    opcode = opcode.map_or("?", Opcode::mnemonic),
                    depth = state.stack().len(),
                    top = ?state.stack().peek(),
                    "step"
                );
                if !running {
                    let (state, _) = machine.into_parts();
                    return Ok(state);
                }
            }
            Err(error) => {
                let (state, _) = machine.into_parts();
                return Err(Fault { error, state });
            }
        }
    }
}
