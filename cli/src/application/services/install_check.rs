//! Application service — verify IBM Installation Manager is installed.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, RemoteHost};
use crate::domain::error::AssertionFailure;
use crate::domain::installation::artifact_checks;

/// Check the launcher, license and version files under `dir`, in that
/// order, stopping at the first one missing.
///
/// # Errors
///
/// Returns `AssertionFailure::MissingArtifact` for the first missing
/// artifact, or a transport error from the host.
pub async fn verify_installation_manager(
    host: &impl RemoteHost,
    reporter: &impl ProgressReporter,
    dir: &str,
) -> Result<()> {
    reporter.step(&format!(
        "Verify IBM Installation Manager is installed into directory: {dir}"
    ));
    let checks = artifact_checks(dir);
    let total = checks.len();
    for (i, check) in checks.into_iter().enumerate() {
        reporter.step(&format!("Verify {}/{total}: {}", i + 1, check.artifact.title()));
        let exists = host
            .file_exists(&check.path)
            .await
            .with_context(|| format!("checking {}", check.path))?;
        if !exists {
            return Err(AssertionFailure::MissingArtifact {
                artifact: check.artifact,
                location: check.location,
                checked: check.path,
            }
            .into());
        }
    }
    reporter.success(&format!("IBM Installation Manager found in {dir}"));
    Ok(())
}
