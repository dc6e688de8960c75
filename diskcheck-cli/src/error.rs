//! CLI error types and exit codes.

use diskcheck_core::{ConfigError, DiskCheckError};

/// Exit codes for CLI operations
///
/// Check outcomes use [`diskcheck_core::FleetHealth::exit_code`]; these cover
/// everything else.
pub mod exit_codes {
    /// Auxiliary command completed
    pub const SUCCESS: i32 = 0;
    /// General error - configuration, validation, or other fatal errors
    pub const GENERAL_ERROR: i32 = 1;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Inventory or threshold error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No inventory path given
    #[error("Missing required option: --config")]
    MissingConfig,

    /// Report rendering error
    #[error("Report error: {0}")]
    Report(String),

    /// Async runtime could not be started
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DiskCheckError> for CliError {
    fn from(err: DiskCheckError) -> Self {
        match err {
            DiskCheckError::Report(e) => Self::Report(e),
        }
    }
}

impl CliError {
    /// Returns the exit code for this error.
    ///
    /// Every fatal error uses the general error code; 2 is reserved for
    /// fleets with failed hosts, which is a check outcome, not an error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::MissingConfig
            | Self::Report(_)
            | Self::Runtime(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
