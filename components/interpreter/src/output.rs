//! Output sinks for the OUT instruction
//!
//! The machine writes one value per OUT and never reads anything back.

use core_types::Number;
use std::io::{self, Write};
use tracing::{info, warn};

/// Append-only destination for emitted values
pub trait OutputSink {
    /// Accept one value
    fn emit(&mut self, value: Number);
}

/// Collects values in memory.
impl OutputSink for Vec<Number> {
    fn emit(&mut self, value: Number) {
        self.push(value);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, value: Number) {
        (**self).emit(value);
    }
}

/// Writes each value on its own line
///
/// Write failures are logged and dropped; the machine has no way to react
/// to them.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink over a writer
    pub fn new(writer: W) -> Self {
        Self { writer, emitted: 0 }
    }

    /// Values written so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, value: Number) {
        match writeln!(self.writer, "{}", value) {
            Ok(()) => self.emitted += 1,
            Err(error) => warn!(%error, %value, "failed to write output value"),
        }
    }
}

/// Reports each value as an `info` event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn emit(&mut self, value: Number) {
        info!(target: "stackvm::out", %value, "OUT");
    }
}
