//! Tracing integration for structured logging
//!
//! All diagnostics go to stderr so that stdout carries only the report.
//! The subscriber is installed once by the binary through [`init_tracing`];
//! library code only emits events and spans.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "DISKCHECK_LOG";

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Tracing log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Error level - only errors
    Error,
    /// Warn level - errors and warnings (default, shows parse diagnostics)
    #[default]
    Warn,
    /// Info level - per-host outcomes
    Info,
    /// Debug level - all above plus debug messages
    Debug,
    /// Trace level - all messages including ssh arguments
    Trace,
}

impl TracingLevel {
    /// Maps `-q` / `-v` counts to a level
    #[must_use]
    pub const fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Error;
        }
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level
    pub level: TracingLevel,
    /// Custom filter string (overrides level if set)
    pub filter: Option<String>,
    /// Whether to emit ANSI colors
    pub ansi: bool,
}

impl TracingConfig {
    /// Creates a new tracing configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets a custom filter string
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Enables or disables ANSI colors
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Picks up a filter from [`LOG_ENV_VAR`] if it is set and non-empty
    #[must_use]
    pub fn with_env_filter(self) -> Self {
        match std::env::var(LOG_ENV_VAR) {
            Ok(filter) if !filter.trim().is_empty() => self.with_filter(filter),
            _ => self,
        }
    }

    /// Filter directive applied when no custom filter is set
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("diskcheck_core={level},diskcheck={level}", level = self.level)
    }

    /// Builds the subscriber filter.
    ///
    /// An invalid custom filter falls back to [`Self::default_directive`];
    /// the parse error is returned alongside so it can be reported once
    /// logging is up.
    #[must_use]
    pub fn build_filter(&self) -> (EnvFilter, Option<String>) {
        let default = || {
            EnvFilter::try_new(self.default_directive()).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        match self.filter.as_deref() {
            Some(custom) => match EnvFilter::try_new(custom) {
                Ok(filter) => (filter, None),
                Err(e) => (default(), Some(e.to_string())),
            },
            None => (default(), None),
        }
    }
}

/// Initializes the stderr tracing subscriber with the given configuration
///
/// # Errors
///
/// Returns an error if tracing has already been initialized or the
/// subscriber fails to install. An invalid custom filter is not an error: the
/// default directive is used and a warning is logged.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let (filter, filter_error) = config.build_filter();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    if let Some(error) = filter_error {
        tracing::warn!(
            filter = config.filter.as_deref().unwrap_or_default(),
            %error,
            "Invalid log filter in {LOG_ENV_VAR}, using default"
        );
    }
    tracing::debug!(level = %config.level, "Tracing initialized");

    Ok(())
}

/// Standard span names for diskcheck operations
pub mod span_names {
    /// Inventory load span
    pub const CONFIG_LOAD: &str = "config.load";
    /// Whole-fleet check span
    pub const FLEET_CHECK: &str = "fleet.check";
    /// Single-host probe span
    pub const HOST_PROBE: &str = "host.probe";
}
