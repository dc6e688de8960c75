//! Fleet-wide checks and health summary
//!
//! [`FleetAggregator`] probes every configured host strictly in order, one at
//! a time, and [`FleetSummary`] condenses the results into the counters that
//! decide the process exit code.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::models::{HostRecord, HostResult};
use crate::probe::HostProbe;
use crate::remote::RemoteCommandRunner;

/// Exit code when every host is below the threshold
pub const EXIT_HEALTHY: i32 = 0;
/// Exit code when at least one filesystem breached the threshold
pub const EXIT_WARNING: i32 = 1;
/// Exit code when at least one host could not be checked
pub const EXIT_FAILED: i32 = 2;

/// Overall health of a checked fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FleetHealth {
    /// All hosts checked, nothing over threshold
    Healthy,
    /// All hosts checked, something over threshold
    Warning,
    /// At least one host failed
    Failed,
}

impl FleetHealth {
    /// Returns the process exit code for this health state
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Healthy => EXIT_HEALTHY,
            Self::Warning => EXIT_WARNING,
            Self::Failed => EXIT_FAILED,
        }
    }
}

impl std::fmt::Display for FleetHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Counters derived from a completed set of host results.
///
/// `warning_count` and `error_count` are disjoint; hosts that succeeded
/// without warnings are counted in neither, so `total` is not their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    /// Number of host results
    pub total: usize,
    /// Successful hosts with at least one flagged filesystem
    pub warning_count: usize,
    /// Failed hosts
    pub error_count: usize,
}

impl FleetSummary {
    /// Creates a summary from a list of results
    #[must_use]
    pub fn from_results(results: &[HostResult]) -> Self {
        let error_count = results.iter().filter(|r| r.is_failure()).count();
        let warning_count = results
            .iter()
            .filter(|r| r.is_success() && r.has_warnings())
            .count();

        Self {
            total: results.len(),
            warning_count,
            error_count,
        }
    }

    /// Hosts that succeeded with nothing over threshold
    #[must_use]
    pub const fn healthy_count(&self) -> usize {
        self.total.saturating_sub(self.warning_count + self.error_count)
    }

    /// Returns the overall health. Failures take precedence over warnings.
    #[must_use]
    pub const fn health(&self) -> FleetHealth {
        if self.error_count > 0 {
            FleetHealth::Failed
        } else if self.warning_count > 0 {
            FleetHealth::Warning
        } else {
            FleetHealth::Healthy
        }
    }

    /// Returns the process exit code for this summary
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.health().exit_code()
    }

    /// Returns a one-line summary
    #[must_use]
    pub fn summary_string(&self) -> String {
        format!(
            "Total: {}, Warnings: {}, Errors: {}",
            self.total, self.warning_count, self.error_count
        )
    }
}

/// Runs [`HostProbe`] over a whole fleet
#[derive(Debug, Clone)]
pub struct FleetAggregator {
    probe: HostProbe,
}

impl FleetAggregator {
    /// Creates an aggregator with a default probe over `runner`
    #[must_use]
    pub fn new(runner: Arc<dyn RemoteCommandRunner>) -> Self {
        Self::with_probe(HostProbe::new(runner))
    }

    /// Creates an aggregator around a configured probe
    #[must_use]
    pub const fn with_probe(probe: HostProbe) -> Self {
        Self { probe }
    }

    /// Checks every host in input order.
    ///
    /// Hosts are probed sequentially; a hung host delays all that follow it
    /// by up to the probe timeout. The result has exactly one entry per
    /// record, in the same order.
    pub async fn check_all(
        &self,
        records: &[HostRecord],
        threshold_percent: u8,
    ) -> Vec<HostResult> {
        let span = tracing::info_span!(
            crate::tracing::span_names::FLEET_CHECK,
            hosts = records.len(),
            threshold = threshold_percent,
        );

        async {
            let mut results = Vec::with_capacity(records.len());
            for record in records {
                results.push(self.probe.probe(record, threshold_percent).await);
            }

            let summary = Self::summarize(&results);
            tracing::info!(
                total = summary.total,
                warnings = summary.warning_count,
                errors = summary.error_count,
                "Fleet check complete"
            );
            results
        }
        .instrument(span)
        .await
    }

    /// Computes the fleet summary for completed results
    #[must_use]
    pub fn summarize(results: &[HostResult]) -> FleetSummary {
        FleetSummary::from_results(results)
    }
}
