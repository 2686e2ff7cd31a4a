//! Settings loading from a YAML file on disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::domain::config::{Settings, validate_settings};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "WAS_ACCEPT_CONFIG";

/// Settings file path: explicit flag, then `WAS_ACCEPT_CONFIG`.
#[must_use]
pub fn settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
}

/// Load and validate settings. No path, or a path that does not exist,
/// yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "settings file absent, using defaults");
            Settings::default()
        }
        None => Settings::default(),
    };
    validate_settings(&settings)?;
    Ok(settings)
}
