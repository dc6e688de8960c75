//! Usage threshold validation

use std::fmt;

use crate::error::{ConfigError, ConfigResult};

/// Threshold applied when none is configured
pub const DEFAULT_THRESHOLD_PERCENT: u8 = 80;

/// A validated usage threshold in percent (`1..=100`).
///
/// Filesystems whose usage is at or above this value are flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u8);

impl Threshold {
    /// Validates a raw threshold value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] unless `0 < value <= 100`.
    pub fn new(value: i64) -> ConfigResult<Self> {
        if (1..=100).contains(&value) {
            u8::try_from(value)
                .map(Self)
                .map_err(|_| ConfigError::InvalidThreshold(value))
        } else {
            Err(ConfigError::InvalidThreshold(value))
        }
    }

    /// Returns the threshold in percent
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_PERCENT)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
