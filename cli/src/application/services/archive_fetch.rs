//! Application service — download an installer archive and unpack it on the host.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, RemoteHost, TemplateSource};
use crate::domain::apply::check_apply;
use crate::domain::archive::{ArchiveKind, ArchiveSpec};
use crate::domain::config::PUPPET_BIN;
use crate::domain::manifest::{FETCH_TEMPLATE, fetch_vars, render};

/// Render the fetch manifest for `spec` without touching any host.
///
/// # Errors
///
/// Returns `AssertionFailure::UnsupportedArchive` for an unknown archive type,
/// or an internal error when the template is missing or has unbound placeholders.
pub fn render_fetch_manifest(templates: &impl TemplateSource, spec: &ArchiveSpec) -> Result<String> {
    classify_and_render(templates, spec).map(|(_, manifest)| manifest)
}

fn classify_and_render(
    templates: &impl TemplateSource,
    spec: &ArchiveSpec,
) -> Result<(ArchiveKind, String)> {
    let kind = spec.kind()?;
    let source = templates.load(FETCH_TEMPLATE)?;
    let manifest = render(FETCH_TEMPLATE, &source, &fetch_vars(spec, kind))?;
    Ok((kind, manifest))
}

/// Download `spec.file` from `spec.url` and unpack it under `spec.dest`.
///
/// The rendered manifest is piped to `puppet apply --detailed-exitcodes`.
/// Exit codes 0 and 2 pass; any other code, or an `Error` line anywhere in
/// the output, fails the step.
///
/// # Errors
///
/// Returns an `AssertionFailure` when the archive type is unsupported or the
/// apply fails, and an internal error when rendering or the transport fails.
pub async fn fetch_and_extract(
    host: &impl RemoteHost,
    templates: &impl TemplateSource,
    reporter: &impl ProgressReporter,
    spec: &ArchiveSpec,
) -> Result<()> {
    let (kind, manifest) = classify_and_render(templates, spec)?;
    reporter.step(&format!(
        "Downloading {kind} archive {} and uncompressing into {} on {}",
        spec.source_url(),
        spec.dest,
        host.name()
    ));
    tracing::debug!(host = host.name(), manifest = %manifest, "applying fetch manifest");

    let output = host
        .exec_with_stdin(&[PUPPET_BIN, "apply", "--detailed-exitcodes"], manifest.as_bytes())
        .await
        .context("puppet apply")?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    tracing::debug!(code = ?output.status.code(), "puppet apply finished");

    check_apply(output.status.code(), &combined)?;
    reporter.success(&format!("{} uncompressed into {}", spec.file, spec.dest));
    Ok(())
}
