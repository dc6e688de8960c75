//! JSON report
//!
//! The document is an array with one object per host, in check order.
//! Field order is fixed:
//!
//! - success: `status` (`"success"`), `name`, `host`, `disks`, where each
//!   disk is `device`, `size`, `used`, `available`, `usage_percent`,
//!   `mount`, `warning`
//! - failure: `status` (`"error"`), `name`, `host`, `error`
//!
//! [`parse`] reads the same document back into [`HostResult`] values.

use crate::error::{DiskCheckError, DiskCheckResult};
use crate::models::HostResult;

/// Serializes results as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`DiskCheckError::Report`] if serialization fails.
pub fn render(results: &[HostResult]) -> DiskCheckResult<String> {
    serde_json::to_string_pretty(results).map_err(|e| DiskCheckError::Report(e.to_string()))
}

/// Reads a JSON report back into host results.
///
/// # Errors
///
/// Returns [`DiskCheckError::Report`] if the document is not a valid report.
pub fn parse(document: &str) -> DiskCheckResult<Vec<HostResult>> {
    serde_json::from_str(document).map_err(|e| DiskCheckError::Report(e.to_string()))
}
