//! Error types for the CLI

use interpreter::Fault;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The machine stopped on a fault
    #[error("machine fault: {0}")]
    Vm(Box<Fault>),

    /// The program file could not be read
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    /// The state snapshot could not be encoded
    #[error("could not encode machine state: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Fault> for CliError {
    fn from(fault: Fault) -> Self {
        CliError::Vm(Box::new(fault))
    }
}

impl CliError {
    /// The machine fault, if that is what this is
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            CliError::Vm(fault) => Some(fault.as_ref()),
            _ => None,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
