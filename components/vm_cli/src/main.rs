//! Stack machine CLI
//!
//! Entry point for the `stackvm` binary. Parses CLI arguments, sets up
//! logging and delegates to the Runtime for execution.

use clap::Parser as ClapParser;
use std::io;
use tracing_subscriber::EnvFilter;
use vm_cli::{state_json, Cli, CliError, Runtime};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let runtime = Runtime::from_cli(&cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match runtime.execute_cli(&cli, &mut out) {
        Ok(_) => {}
        Err(CliError::Vm(fault)) => {
            eprintln!("Error: {}", fault);
            match state_json(&fault.state) {
                Ok(json) => eprintln!("State at failure:\n{}", json),
                Err(e) => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr so program output on stdout stays clean
fn init_logging(cli: &Cli) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    if cli.trace {
        if let Ok(directive) = "stackvm::trace=info".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}
