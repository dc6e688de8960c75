//! Remote command execution
//!
//! [`RemoteCommandRunner`] is the only seam between the checker and the
//! transport. The production implementation is [`SshCommandRunner`], which
//! shells out to OpenSSH; tests substitute a scripted runner.

mod ssh;

use std::time::Duration;

use async_trait::async_trait;

use crate::models::HostRecord;

pub use ssh::{DEFAULT_SSH_PROGRAM, SshCommandRunner};

/// SSH connection establishment timeout (seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Overall per-host command timeout (seconds)
pub const COMMAND_TIMEOUT_SECS: u64 = 30;

/// Result of running one remote command.
///
/// Runners never return errors; every failure is one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command exited with status 0
    Ok {
        /// Captured standard output
        stdout: String,
    },
    /// The command (or the transport) exited with a non-zero status
    NonZeroExit {
        /// Captured standard error
        stderr: String,
    },
    /// The command did not finish within the timeout
    Timeout,
    /// The command could not be run at all
    OtherFailure {
        /// Description of the failure
        message: String,
    },
}

impl CommandOutcome {
    /// Returns true for [`CommandOutcome::Ok`]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Short label for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ok { .. } => "ok",
            Self::NonZeroExit { .. } => "non_zero_exit",
            Self::Timeout => "timeout",
            Self::OtherFailure { .. } => "other_failure",
        }
    }
}

/// Capability to run a single non-interactive command on a host.
///
/// Implementations make exactly one attempt and must return within
/// `timeout` (plus process teardown).
#[async_trait]
pub trait RemoteCommandRunner: Send + Sync {
    /// Runs `command` on the machine described by `record`
    async fn run(&self, record: &HostRecord, command: &str, timeout: Duration) -> CommandOutcome;
}
