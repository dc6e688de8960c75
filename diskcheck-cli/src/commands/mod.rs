//! Command handler modules for the CLI.

mod check;
mod completions;
mod manpage;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, exit_codes};

/// Dispatch the parsed command line and return the process exit code.
pub fn dispatch(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            completions::cmd_completions(shell).map(|()| exit_codes::SUCCESS)
        }
        Some(Commands::Manpage) => manpage::cmd_manpage().map(|()| exit_codes::SUCCESS),
        None => {
            let config = cli.config.ok_or(CliError::MissingConfig)?;
            check::cmd_check(&check::CheckParams {
                config: &config,
                threshold: cli.threshold,
                format: cli.format,
                ssh_program: &cli.ssh_program,
            })
        }
    }
}
