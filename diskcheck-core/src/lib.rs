//! `diskcheck` Core Library
//!
//! This crate audits filesystem capacity across a fleet of remote hosts.
//! Each host is probed over SSH with a single `df` invocation, the tabular
//! output is parsed into filesystem entries, entries at or above the usage
//! threshold are flagged, and the per-host results are summarized and
//! rendered as a text or JSON report.
//!
//! # Crate Structure
//!
//! - [`models`] - Host records, filesystem entries, per-host results
//! - [`config`] - Inventory loading (YAML/TOML) and threshold validation
//! - [`remote`] - Remote command execution (`RemoteCommandRunner`, SSH runner)
//! - [`probe`] - Disk usage parsing and single-host probing
//! - [`fleet`] - Sequential fleet checks and health summary
//! - [`report`] - Text and JSON report rendering
//! - [`tracing`] - Tracing subscriber initialization
//! - [`error`] - Error types

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fleet;
pub mod models;
pub mod probe;
pub mod remote;
pub mod report;
pub mod tracing;

pub use config::{DEFAULT_THRESHOLD_PERCENT, InventoryFormat, Threshold, load_inventory};
pub use error::{
    ConfigError, ConfigResult, DiskCheckError, DiskCheckResult, ParseWarning, ProbeError,
};
pub use fleet::{FleetAggregator, FleetHealth, FleetSummary};
pub use models::{FilesystemEntry, HostRecord, HostResult};
pub use probe::{DISK_USAGE_COMMAND, DiskUsageParser, HostProbe};
pub use remote::{
    COMMAND_TIMEOUT_SECS, CONNECT_TIMEOUT_SECS, CommandOutcome, RemoteCommandRunner,
    SshCommandRunner,
};
pub use report::{ReportFormat, ReportFormatter};
