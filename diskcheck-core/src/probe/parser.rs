//! Parser for remote `df` output
//!
//! Parses the six-column output of [`DISK_USAGE_COMMAND`]:
//!
//! ```text
//! /dev/sda1 100G 45G 50G 47% /
//! /dev/sda2 50G 42G 5G 89% /var
//! ```
//!
//! Pseudo filesystems are already filtered out by the remote command, so
//! every well-formed line becomes a [`FilesystemEntry`]. Malformed lines are
//! skipped with a warning and never fail the host.

use crate::error::ParseWarning;
use crate::models::FilesystemEntry;

/// Shell command that lists block-device filesystems in six columns
/// (device, size, used, available, use%, mount).
pub const DISK_USAGE_COMMAND: &str =
    "df -h | grep -E '^/dev/' | awk '{print $1,$2,$3,$4,$5,$6}'";

/// Number of canonical columns in a `df` line
const FIELD_COUNT: usize = 6;

/// Stateless parser for [`DISK_USAGE_COMMAND`] output
pub struct DiskUsageParser;

impl DiskUsageParser {
    /// Parses `df` output into filesystem entries, in line order.
    ///
    /// Filesystems with `usage_percent >= threshold_percent` are flagged.
    /// Blank lines are ignored; malformed lines are logged and skipped.
    #[must_use]
    pub fn parse(output: &str, threshold_percent: u8) -> Vec<FilesystemEntry> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match Self::parse_line(line, threshold_percent) {
                Ok(entry) => Some(entry),
                Err(reason) => {
                    tracing::warn!(
                        line = %line.trim(),
                        %reason,
                        "Failed to parse disk line"
                    );
                    None
                }
            })
            .collect()
    }

    /// Parses a single `df` line.
    ///
    /// Lines with more than six fields (device or mount names containing
    /// spaces) are read from their last six tokens.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseWarning`] if the line has fewer than six fields or
    /// the usage column is not an integer percentage in `0..=100`.
    pub fn parse_line(line: &str, threshold_percent: u8) -> Result<FilesystemEntry, ParseWarning> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < FIELD_COUNT {
            return Err(ParseWarning::TooFewFields(parts.len()));
        }

        let fields = &parts[parts.len() - FIELD_COUNT..];
        let usage_percent = Self::parse_percent(fields[4])?;

        Ok(FilesystemEntry {
            device: fields[0].to_string(),
            size: fields[1].to_string(),
            used: fields[2].to_string(),
            available: fields[3].to_string(),
            usage_percent,
            mount_path: fields[5].to_string(),
            exceeds_threshold: usage_percent >= threshold_percent,
        })
    }

    /// Parses a value like `47%` into `47`
    fn parse_percent(token: &str) -> Result<u8, ParseWarning> {
        let digits = token.strip_suffix('%').unwrap_or(token);
        let value: i64 = digits
            .parse()
            .map_err(|_| ParseWarning::InvalidUsage(token.to_string()))?;
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .ok_or(ParseWarning::UsageOutOfRange(value))
    }
}
