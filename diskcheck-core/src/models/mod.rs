//! Data models for fleet disk checks
//!
//! Host records are read-only input; filesystem entries and host results are
//! produced fresh on every run and never mutated afterwards.

mod filesystem;
mod host;
mod result;

pub use filesystem::FilesystemEntry;
pub use host::{DEFAULT_SSH_PORT, DEFAULT_SSH_USER, HostRecord};
pub use result::{HostResult, MISSING_HOST_PLACEHOLDER, UNKNOWN_HOST_NAME};
