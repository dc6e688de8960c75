//! Host record model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Login user when the record does not name one
pub const DEFAULT_SSH_USER: &str = "root";

/// SSH port when the record does not name one
pub const DEFAULT_SSH_PORT: u16 = 22;

/// One configured target machine and its connection parameters.
///
/// `host` is optional at the type level so that an inventory entry without an
/// address still loads; such a record is reported as a per-host failure
/// instead of aborting the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Display name (falls back to the host address)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Hostname or IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Login user
    #[serde(default = "default_user")]
    pub user: String,
    /// SSH port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the SSH private key
    #[serde(
        default,
        rename = "ssh_key",
        alias = "credential_path",
        alias = "identity_file",
        skip_serializing_if = "Option::is_none"
    )]
    pub credential_path: Option<String>,
}

fn default_user() -> String {
    DEFAULT_SSH_USER.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_SSH_PORT
}

impl HostRecord {
    /// Creates a record for `host` with default user and port
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            name: None,
            host: Some(host.into()),
            user: default_user(),
            port: DEFAULT_SSH_PORT,
            credential_path: None,
        }
    }

    /// Sets the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the login user
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the SSH port
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the private key path
    #[must_use]
    pub fn with_credential_path(mut self, path: impl Into<String>) -> Self {
        self.credential_path = Some(path.into());
        self
    }

    /// Returns the host address, or `None` when it is absent or blank
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }

    /// Returns the configured name when it is present and non-blank
    #[must_use]
    pub fn configured_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Name used in reports: the configured name, else the address
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.configured_name().or_else(|| self.address())
    }

    /// Returns `user@host`, or `None` without an address
    #[must_use]
    pub fn destination(&self) -> Option<String> {
        self.address().map(|host| format!("{}@{host}", self.user))
    }

    /// Returns the key path with a leading `~` expanded
    #[must_use]
    pub fn expanded_credential_path(&self) -> Option<PathBuf> {
        self.credential_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }
}
