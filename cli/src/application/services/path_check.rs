//! Application service — verify files or directories exist on the host.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, RemoteHost};
use crate::domain::error::AssertionFailure;
use crate::domain::target::PathTarget;

/// Check each path of `target` in order, failing on the first missing one.
/// Paths after a missing one are never queried.
///
/// # Errors
///
/// Returns `AssertionFailure::MissingPath` naming the first missing path, or
/// a transport error from the host.
pub async fn verify_paths_exist(
    host: &impl RemoteHost,
    reporter: &impl ProgressReporter,
    target: &PathTarget,
) -> Result<()> {
    for path in target.paths() {
        let exists = host
            .file_exists(path)
            .await
            .with_context(|| format!("checking {path}"))?;
        if !exists {
            return Err(AssertionFailure::MissingPath { path: path.clone() }.into());
        }
        tracing::debug!(host = host.name(), path = %path, "exists");
    }
    match target {
        PathTarget::One(path) => reporter.success(&format!("{path} exists")),
        PathTarget::Many(paths) => reporter.success(&format!("{} paths exist", paths.len())),
    }
    Ok(())
}
