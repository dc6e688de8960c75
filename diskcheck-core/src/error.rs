//! Error types for diskcheck.
//!
//! Only [`ConfigError`] is fatal to a run. Per-host problems are expressed as
//! [`ProbeError`] and folded into that host's result; per-line parse problems
//! are [`ParseWarning`]s that are logged and skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The inventory file does not exist
    #[error("Configuration file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The inventory file exists but could not be read
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The inventory file could not be parsed
    #[error("Error parsing {format} configuration: {message}")]
    Parse {
        /// Inventory syntax that was expected (YAML or TOML)
        format: &'static str,
        /// Parser diagnostic
        message: String,
    },

    /// The usage threshold is outside `1..=100`
    #[error("Threshold must be between 1 and 100 (got {0})")]
    InvalidThreshold(i64),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Per-host failure reasons.
///
/// The `Display` output of each variant is exactly the error text that ends
/// up in the host's failure result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The host record has no address
    #[error("Missing required parameter: host")]
    MissingHost,

    /// The transport reported a failure (non-zero exit, spawn error, ...)
    #[error("{0}")]
    Transport(String),

    /// The remote command did not finish within the command timeout
    #[error("Connection timeout")]
    Timeout,
}

impl ProbeError {
    /// Builds a transport error from captured stderr, falling back to a
    /// generic message when the remote side printed nothing.
    #[must_use]
    pub fn from_stderr(stderr: &str) -> Self {
        let trimmed = stderr.trim();
        if trimmed.is_empty() {
            Self::Transport("Connection failed".to_string())
        } else {
            Self::Transport(trimmed.to_string())
        }
    }
}

/// Reasons a single line of `df` output is skipped
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// The line has fewer than the six required columns
    #[error("expected at least 6 fields, found {0}")]
    TooFewFields(usize),

    /// The usage column is not an integer percentage
    #[error("invalid usage percentage '{0}'")]
    InvalidUsage(String),

    /// The usage column parsed but lies outside `0..=100`
    #[error("usage percentage {0} out of range")]
    UsageOutOfRange(i64),
}

/// Errors from report rendering and read-back
#[derive(Debug, Error)]
pub enum DiskCheckError {
    /// Report could not be serialized or deserialized
    #[error("Report error: {0}")]
    Report(String),
}

/// Result type alias for diskcheck operations
pub type DiskCheckResult<T> = Result<T, DiskCheckError>;
