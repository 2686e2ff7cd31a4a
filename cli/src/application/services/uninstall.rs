//! Application service — remove a Puppet class from the host.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, RemoteHost};
use crate::domain::config::PUPPET_BIN;
use crate::domain::manifest::{REMOVAL_MANIFEST_PATH, removal_manifest};

/// Write a manifest declaring `class_name` absent to
/// [`REMOVAL_MANIFEST_PATH`] and apply it.
///
/// No accepted-code set applies here: a run that exits non-zero is reported
/// as a harness error with the command's stderr, never as an assertion.
///
/// # Errors
///
/// Returns an error if the write or the apply fails.
pub async fn remove_class(
    host: &impl RemoteHost,
    reporter: &impl ProgressReporter,
    class_name: &str,
) -> Result<()> {
    reporter.step(&format!("Removing class {class_name} from {}", host.name()));
    host.write_file(REMOVAL_MANIFEST_PATH, &removal_manifest(class_name))
        .await
        .with_context(|| format!("writing {REMOVAL_MANIFEST_PATH}"))?;

    let output = host
        .exec(&[PUPPET_BIN, "apply", REMOVAL_MANIFEST_PATH])
        .await
        .context("puppet apply")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "puppet apply {REMOVAL_MANIFEST_PATH} failed ({}): {}",
            output.status,
            stderr.trim()
        );
    }
    reporter.success(&format!("{class_name} removed"));
    Ok(())
}
