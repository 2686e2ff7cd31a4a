//! Infrastructure implementation of the `TemplateSource` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::TemplateSource;
use crate::domain::error::InternalError;

/// Environment variable overriding the template root.
pub const TEMPLATE_ROOT_ENV: &str = "FILES";

/// Loads templates from a directory on the local filesystem.
pub struct FsTemplateSource {
    root: PathBuf,
}

impl FsTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `FILES` when set, else `configured`.
    #[must_use]
    pub fn from_env_or(configured: &str) -> Self {
        match std::env::var(TEMPLATE_ROOT_ENV) {
            Ok(root) if !root.is_empty() => Self::new(root),
            _ => Self::new(configured),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for FsTemplateSource {
    fn load(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        tracing::debug!(path = %path.display(), "loading template");
        if !path.is_file() {
            return Err(InternalError::TemplateNotFound {
                name: name.to_string(),
                root: self.root.display().to_string(),
            }
            .into());
        }
        std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))
    }
}
