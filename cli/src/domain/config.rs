//! Domain types and validators for harness configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::InternalError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Template root used when neither `FILES` nor the config file sets one.
pub const DEFAULT_TEMPLATE_ROOT: &str = "tests/files";

/// Absolute path of the Puppet binary on provisioned hosts.
pub const PUPPET_BIN: &str = "/opt/puppetlabs/puppet/bin/puppet";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration, usually stored in a YAML file next to the suites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory manifest templates are loaded from.
    pub template_root: String,
    /// Timeout for existence checks.
    pub command_timeout_secs: u64,
    /// Timeout for `puppet apply` runs and other host commands.
    pub apply_timeout_secs: u64,
    /// SSH connection options.
    pub ssh: SshSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_root: DEFAULT_TEMPLATE_ROOT.to_string(),
            command_timeout_secs: 30,
            apply_timeout_secs: 1800,
            ssh: SshSettings::default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    #[must_use]
    pub fn apply_timeout(&self) -> Duration {
        Duration::from_secs(self.apply_timeout_secs)
    }
}

/// SSH configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SshSettings {
    /// Login user when the host spec carries none.
    pub user: Option<String>,
    pub port: Option<u16>,
    /// Private key passed with `-i`.
    pub identity_file: Option<String>,
}

// ── Host spec ────────────────────────────────────────────────────────────────

/// Where host commands run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSpec {
    /// The machine running the harness.
    Local,
    /// A machine reached with `ssh`.
    Ssh { user: Option<String>, host: String },
}

impl HostSpec {
    /// Parse `local` or `[user@]host`.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty host or user.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.eq_ignore_ascii_case("local") || spec == "localhost" {
            return Ok(Self::Local);
        }
        let (user, host) = match spec.split_once('@') {
            Some((user, host)) => (Some(user), host),
            None => (None, spec),
        };
        if host.is_empty() || user.is_some_and(str::is_empty) || host.contains(char::is_whitespace) {
            return Err(InternalError::InvalidSetting {
                key: "host".to_string(),
                reason: format!("'{spec}' is not 'local' or '[user@]host'"),
            }
            .into());
        }
        Ok(Self::Ssh {
            user: user.map(str::to_string),
            host: host.to_string(),
        })
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates loaded settings.
///
/// # Errors
///
/// Returns an error if a timeout is zero or the template root is empty.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    let invalid = |key: &str, reason: &str| -> anyhow::Error {
        InternalError::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };
    if settings.command_timeout_secs == 0 {
        return Err(invalid("command_timeout_secs", "must be greater than zero"));
    }
    if settings.apply_timeout_secs == 0 {
        return Err(invalid("apply_timeout_secs", "must be greater than zero"));
    }
    if settings.template_root.trim().is_empty() {
        return Err(invalid("template_root", "must not be empty"));
    }
    Ok(())
}
