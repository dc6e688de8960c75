//! Per-host check results

use serde::{Deserialize, Serialize};

use super::{FilesystemEntry, HostRecord};
use crate::error::ProbeError;

/// Host field value when the record had no address
pub const MISSING_HOST_PLACEHOLDER: &str = "N/A";

/// Name used when a record has neither a name nor an address
pub const UNKNOWN_HOST_NAME: &str = "Unknown";

/// Outcome of checking one host.
///
/// Serialized with a `status` tag of `"success"` or `"error"`. Successful
/// results list their filesystems under `disks`; failures carry the message
/// under `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum HostResult {
    /// The remote command ran and its output was parsed
    #[serde(rename = "success")]
    Success {
        /// Display name of the host
        name: String,
        /// Host address as configured
        host: String,
        /// Parsed filesystems in output order
        #[serde(rename = "disks")]
        filesystems: Vec<FilesystemEntry>,
    },
    /// The host could not be checked
    #[serde(rename = "error")]
    Failure {
        /// Display name of the host
        name: String,
        /// Host address as configured, or `"N/A"`
        host: String,
        /// Human-readable reason
        #[serde(rename = "error")]
        error_message: String,
    },
}

impl HostResult {
    /// Creates a successful result
    #[must_use]
    pub fn success(
        name: impl Into<String>,
        host: impl Into<String>,
        filesystems: Vec<FilesystemEntry>,
    ) -> Self {
        Self::Success {
            name: name.into(),
            host: host.into(),
            filesystems,
        }
    }

    /// Creates a failed result
    #[must_use]
    pub fn failure(
        name: impl Into<String>,
        host: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self::Failure {
            name: name.into(),
            host: host.into(),
            error_message: error_message.into(),
        }
    }

    /// Creates a failed result for `record` from a [`ProbeError`].
    ///
    /// Name and host fall back the same way for every failure kind, so a
    /// record without an address always reports `"N/A"` as its host.
    #[must_use]
    pub fn from_error(record: &HostRecord, error: &ProbeError) -> Self {
        let name = record.display_name().unwrap_or(UNKNOWN_HOST_NAME);
        let host = record.address().unwrap_or(MISSING_HOST_PLACEHOLDER);
        Self::failure(name, host, error.to_string())
    }

    /// Returns the display name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Success { name, .. } | Self::Failure { name, .. } => name,
        }
    }

    /// Returns the host address
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Self::Success { host, .. } | Self::Failure { host, .. } => host,
        }
    }

    /// Returns true for [`HostResult::Success`]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true for [`HostResult::Failure`]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns the parsed filesystems (empty for failures)
    #[must_use]
    pub fn filesystems(&self) -> &[FilesystemEntry] {
        match self {
            Self::Success { filesystems, .. } => filesystems,
            Self::Failure { .. } => &[],
        }
    }

    /// Returns the failure message, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_message, .. } => Some(error_message),
        }
    }

    /// Returns true if this is a success with at least one flagged filesystem
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.filesystems().iter().any(FilesystemEntry::is_warning)
    }

    /// Returns only the flagged filesystems
    #[must_use]
    pub fn warning_filesystems(&self) -> Vec<&FilesystemEntry> {
        self.filesystems().iter().filter(|fs| fs.is_warning()).collect()
    }
}
