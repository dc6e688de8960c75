//! Report rendering
//!
//! Two formats are supported: a human-readable text layout and a JSON array
//! with one object per host. See [`json`] for the JSON field contract.

pub mod json;
mod text;

use std::fmt;

use crate::error::DiskCheckResult;
use crate::models::HostResult;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Renders host results as reports
pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders results as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DiskCheckError::Report`] if serialization fails.
    pub fn to_structured(results: &[HostResult]) -> DiskCheckResult<String> {
        json::render(results)
    }

    /// Renders results as a human-readable report
    #[must_use]
    pub fn to_text(results: &[HostResult]) -> String {
        text::render(results)
    }

    /// Renders results in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error only for JSON serialization failures.
    pub fn render(format: ReportFormat, results: &[HostResult]) -> DiskCheckResult<String> {
        match format {
            ReportFormat::Text => Ok(Self::to_text(results)),
            ReportFormat::Json => Self::to_structured(results),
        }
    }
}
