//! SSH command execution
//!
//! Runs commands on remote hosts through the system `ssh` binary. Each call
//! spawns a fresh process; nothing is pooled or reused between hosts.
//!
//! Host key checking is disabled (`StrictHostKeyChecking=no`) so that hosts
//! never seen before do not block the run. Deployments that need host key
//! verification must pin keys in the ssh client configuration instead.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::{CONNECT_TIMEOUT_SECS, CommandOutcome, RemoteCommandRunner};
use crate::models::HostRecord;

/// Default ssh client program
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// [`RemoteCommandRunner`] backed by the OpenSSH client
#[derive(Debug, Clone)]
pub struct SshCommandRunner {
    program: String,
}

impl Default for SshCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SshCommandRunner {
    /// Creates a runner that invokes `ssh` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: DEFAULT_SSH_PROGRAM.to_string(),
        }
    }

    /// Uses a different ssh client binary
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Builds the ssh argument list for running `command` on `record`.
    ///
    /// Returns `None` if the record has no host address.
    #[must_use]
    pub fn build_args(record: &HostRecord, command: &str) -> Option<Vec<String>> {
        let destination = record.destination()?;

        let mut args = vec![
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={CONNECT_TIMEOUT_SECS}"),
            // Never fall back to an interactive password prompt
            "-o".to_string(),
            "BatchMode=yes".to_string(),
        ];

        if let Some(key) = record.expanded_credential_path() {
            args.push("-i".to_string());
            args.push(key.to_string_lossy().into_owned());
        }

        args.push("-p".to_string());
        args.push(record.port.to_string());
        args.push(destination);
        args.push(command.to_string());

        Some(args)
    }
}

#[async_trait]
impl RemoteCommandRunner for SshCommandRunner {
    async fn run(&self, record: &HostRecord, command: &str, timeout: Duration) -> CommandOutcome {
        let Some(args) = Self::build_args(record, command) else {
            return CommandOutcome::OtherFailure {
                message: "Missing required parameter: host".to_string(),
            };
        };

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the output future on timeout must not leave ssh behind
            .kill_on_drop(true);

        tracing::trace!(program = %self.program, ?args, "Spawning ssh");

        match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(Ok(output)) => {
                if output.status.success() {
                    CommandOutcome::Ok {
                        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    }
                } else {
                    tracing::debug!(
                        status = %output.status,
                        "ssh exited unsuccessfully"
                    );
                    CommandOutcome::NonZeroExit {
                        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    }
                }
            }
            Ok(Err(e)) => CommandOutcome::OtherFailure {
                message: format!("Failed to spawn {}: {e}", self.program),
            },
            Err(_) => CommandOutcome::Timeout,
        }
    }
}
