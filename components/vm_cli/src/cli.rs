//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Run stack machine programs
#[derive(Debug, Clone, Parser)]
#[command(name = "stackvm", version)]
pub struct Cli {
    /// Program listing to run
    #[arg(value_name = "PROGRAM", conflicts_with_all = ["file", "eval"])]
    pub program: Option<PathBuf>,

    /// Program listing to run (same as the positional argument)
    #[arg(short, long, value_name = "FILE", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Inline program listing, e.g. "PUSH 2 PUSH 3 ADD OUT"
    #[arg(short, long, value_name = "LISTING")]
    pub eval: Option<String>,

    /// Print the disassembly before running
    #[arg(short, long)]
    pub disassemble: bool,

    /// Log every machine cycle
    #[arg(short, long)]
    pub trace: bool,

    /// Print the final machine state as JSON
    #[arg(long)]
    pub dump_state: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Where the program comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSource {
    /// A listing file
    File(PathBuf),
    /// A listing given on the command line
    Inline(String),
    /// The built-in Fibonacci demo
    Demo,
}

impl Cli {
    /// Arguments that run a listing file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    /// Arguments that run an inline listing
    pub fn with_eval(listing: impl Into<String>) -> Self {
        Self {
            eval: Some(listing.into()),
            ..Self::default()
        }
    }

    /// Resolve which program to run
    pub fn source(&self) -> ProgramSource {
        if let Some(path) = self.program.as_ref().or(self.file.as_ref()) {
            ProgramSource::File(path.clone())
        } else if let Some(listing) = &self.eval {
            ProgramSource::Inline(listing.clone())
        } else {
            ProgramSource::Demo
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            program: None,
            file: None,
            eval: None,
            disassemble: false,
            trace: false,
            dump_state: false,
            log_level: "warn".to_string(),
        }
    }
}
