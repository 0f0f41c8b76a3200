//! Stack machine CLI library
//!
//! Provides the argument definitions and the Runtime that backs the
//! `stackvm` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod demo;
pub mod error;
pub mod runtime;

pub use cli::{Cli, ProgramSource};
pub use error::{CliError, CliResult};
pub use runtime::{state_json, Runtime};
