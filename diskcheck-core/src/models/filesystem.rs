//! Filesystem entry model

use serde::{Deserialize, Serialize};

/// One parsed row of `df` output for a single mounted filesystem.
///
/// Sizes are kept verbatim as `df -h` printed them (`100G`, `512M`, ...).
/// The serialized field names match the JSON report format: `mount` for the
/// mount path and `warning` for the threshold flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemEntry {
    /// Block device (e.g. `/dev/sda1`)
    pub device: String,
    /// Total size as reported
    pub size: String,
    /// Used space as reported
    pub used: String,
    /// Available space as reported
    pub available: String,
    /// Usage percentage (0–100)
    pub usage_percent: u8,
    /// Mount point
    #[serde(rename = "mount")]
    pub mount_path: String,
    /// Whether `usage_percent` is at or above the threshold
    #[serde(rename = "warning")]
    pub exceeds_threshold: bool,
}

impl FilesystemEntry {
    /// Returns true if this filesystem breached the threshold
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.exceeds_threshold
    }
}
