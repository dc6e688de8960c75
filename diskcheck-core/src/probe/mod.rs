//! Single-host disk usage probing
//!
//! A [`HostProbe`] validates a host record, runs [`DISK_USAGE_COMMAND`]
//! through a [`RemoteCommandRunner`], parses the output with
//! [`DiskUsageParser`], and turns every possible outcome into a
//! [`HostResult`]. Nothing escapes this boundary as an error.

mod parser;

use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::error::ProbeError;
use crate::models::{HostRecord, HostResult};
use crate::remote::{COMMAND_TIMEOUT_SECS, CommandOutcome, RemoteCommandRunner};

pub use parser::{DISK_USAGE_COMMAND, DiskUsageParser};

/// Checks disk usage on one host at a time
#[derive(Clone)]
pub struct HostProbe {
    runner: Arc<dyn RemoteCommandRunner>,
    timeout: Duration,
}

impl std::fmt::Debug for HostProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostProbe")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HostProbe {
    /// Creates a probe with the default 30 second command timeout
    #[must_use]
    pub fn new(runner: Arc<dyn RemoteCommandRunner>) -> Self {
        Self {
            runner,
            timeout: Duration::from_secs(COMMAND_TIMEOUT_SECS),
        }
    }

    /// Sets the overall command timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks one host.
    ///
    /// A record without an address fails immediately, before the runner is
    /// consulted.
    pub async fn probe(&self, record: &HostRecord, threshold_percent: u8) -> HostResult {
        let Some(host) = record.address() else {
            tracing::info!(
                name = record.configured_name().unwrap_or_default(),
                "Host record has no address"
            );
            return HostResult::from_error(record, &ProbeError::MissingHost);
        };
        let name = record.display_name().unwrap_or(host);

        // Warn level so parse warnings carry host context under the default filter
        let span = tracing::warn_span!(
            crate::tracing::span_names::HOST_PROBE,
            name = %name,
            host = %host,
            port = record.port,
        );

        async {
            let outcome = self
                .runner
                .run(record, DISK_USAGE_COMMAND, self.timeout)
                .await;
            tracing::debug!(outcome = outcome.kind(), "Remote command finished");

            match outcome {
                CommandOutcome::Ok { stdout } => {
                    let filesystems = DiskUsageParser::parse(&stdout, threshold_percent);
                    let warnings = filesystems.iter().filter(|fs| fs.is_warning()).count();
                    tracing::info!(
                        filesystems = filesystems.len(),
                        warnings,
                        "Host checked"
                    );
                    HostResult::success(name, host, filesystems)
                }
                CommandOutcome::NonZeroExit { stderr } => {
                    Self::failed(record, &ProbeError::from_stderr(&stderr))
                }
                CommandOutcome::Timeout => Self::failed(record, &ProbeError::Timeout),
                CommandOutcome::OtherFailure { message } => {
                    Self::failed(record, &ProbeError::Transport(message))
                }
            }
        }
        .instrument(span)
        .await
    }

    fn failed(record: &HostRecord, error: &ProbeError) -> HostResult {
        tracing::info!(error = %error, "Host check failed");
        HostResult::from_error(record, error)
    }
}
