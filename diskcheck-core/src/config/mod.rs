//! Inventory and run configuration
//!
//! The inventory lists the hosts to check. YAML is the default syntax:
//!
//! ```yaml
//! vms:
//!   - name: "Web 1"
//!     host: 192.168.1.10
//!     user: admin
//!     port: 22
//!     ssh_key: ~/.ssh/id_ed25519
//! ```
//!
//! Files ending in `.toml` are read as TOML with `[[vms]]` tables. Any
//! failure to read or parse the inventory is fatal to the run.

mod threshold;

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::models::HostRecord;

pub use threshold::{DEFAULT_THRESHOLD_PERCENT, Threshold};

/// On-disk inventory document
#[derive(Debug, Default, Deserialize)]
struct Inventory {
    #[serde(default, alias = "hosts")]
    vms: Vec<HostRecord>,
}

/// Inventory file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryFormat {
    /// YAML document with a top-level `vms` list
    Yaml,
    /// TOML document with `[[vms]]` tables
    Toml,
}

impl InventoryFormat {
    /// Picks the syntax from the file extension (`.toml` is TOML, anything
    /// else is YAML)
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    /// Human-readable syntax name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }
}

/// Loads host records from an inventory file.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist,
/// [`ConfigError::Read`] if it cannot be read, and [`ConfigError::Parse`]
/// if its contents are not a valid inventory.
pub fn load_inventory(path: &Path) -> ConfigResult<Vec<HostRecord>> {
    let _span = tracing::debug_span!(
        crate::tracing::span_names::CONFIG_LOAD,
        path = %path.display()
    )
    .entered();

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let hosts = parse_inventory(&content, InventoryFormat::from_path(path))?;
    tracing::debug!(host_count = hosts.len(), "Inventory loaded");
    Ok(hosts)
}

/// Parses inventory text in the given syntax.
///
/// A blank document is an empty fleet, as is a document without a `vms` key.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] on malformed input.
pub fn parse_inventory(content: &str, format: InventoryFormat) -> ConfigResult<Vec<HostRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let inventory: Inventory = match format {
        InventoryFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                format: format.as_str(),
                message: e.to_string(),
            })?
        }
        InventoryFormat::Toml => toml::from_str(content).map_err(|e| ConfigError::Parse {
            format: format.as_str(),
            message: e.to_string(),
        })?,
    };

    Ok(inventory.vms)
}
