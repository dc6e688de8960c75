//! `diskcheck` - audit disk usage across a fleet of hosts over SSH
//!
//! Reads a host inventory, runs one `df` probe per host, prints a text or
//! JSON report on stdout, and exits 0 (healthy), 1 (filesystems over
//! threshold) or 2 (hosts that could not be checked).

mod cli;
mod commands;
mod error;

use std::io::IsTerminal;

use clap::Parser;
use cli::Cli;
use diskcheck_core::tracing::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();

    let tracing_config = TracingConfig::new()
        .with_level(TracingLevel::from_verbosity(cli.verbose, cli.quiet))
        .with_ansi(!cli.no_color && std::io::stderr().is_terminal())
        .with_env_filter();
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: {e}");
    }

    match commands::dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
