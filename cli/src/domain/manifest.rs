//! Puppet manifest construction.
//!
//! Templates use `{{ name }}` placeholders. Values are passed explicitly;
//! nothing is captured from the caller's scope.
//!
//! Fetch values arrive pre-escaped: plain values for Puppet single-quoted
//! strings, `*_command` values for Puppet double-quoted strings.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::archive::{ArchiveKind, ArchiveSpec};
use crate::domain::error::InternalError;
use crate::domain::shell::quote;

/// Template rendered by the fetch-and-extract operation.
pub const FETCH_TEMPLATE: &str = "download_uncompress_manifest.pp.tmpl";

/// Remote path the removal manifest is always written to.
pub const REMOVAL_MANIFEST_PATH: &str = "/root/remove_websphere.pp";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid regex")
});

/// Named values substituted into a template.
pub type TemplateVars = BTreeMap<&'static str, String>;

/// Substitute every placeholder in `source`.
///
/// # Errors
///
/// Returns [`InternalError::UnboundPlaceholder`] for the first placeholder
/// with no value in `vars`.
pub fn render(name: &str, source: &str, vars: &TemplateVars) -> Result<String, InternalError> {
    if let Some(missing) = PLACEHOLDER_RE
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .find(|key| !vars.contains_key(key.as_str()))
    {
        return Err(InternalError::UnboundPlaceholder {
            template: name.to_string(),
            placeholder: missing,
        });
    }
    Ok(PLACEHOLDER_RE
        .replace_all(source, |caps: &Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned())
}

/// Escape `s` for the inside of a Puppet single-quoted string.
#[must_use]
pub fn puppet_single(s: &str) -> String {
    s.replace('\\', r"\\").replace('\'', r"\'")
}

/// Escape `s` for the inside of a Puppet double-quoted string, so no
/// variable interpolation or escape sequence applies.
#[must_use]
pub fn puppet_double(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('$', r"\$")
}

/// Values for [`FETCH_TEMPLATE`].
#[must_use]
pub fn fetch_vars(spec: &ArchiveSpec, kind: ArchiveKind) -> TemplateVars {
    let staged = spec.staged_path();
    let source = spec.source_url();
    let mkdir = format!("mkdir -p {}", quote(&spec.dest));
    let download = format!("curl -fsSL -o {} {}", quote(&staged), quote(&source));
    let extract = kind.extract_command(&staged, &spec.dest);
    TemplateVars::from([
        ("compress_type", kind.as_str().to_string()),
        ("installer_url", puppet_single(&spec.url)),
        ("source_url", puppet_single(&source)),
        ("file_name", puppet_single(&spec.file)),
        ("dest_directory", puppet_single(&spec.dest)),
        ("staged_path", puppet_single(&staged)),
        ("mkdir_command", puppet_double(&mkdir)),
        ("download_command", puppet_double(&download)),
        ("extract_command", puppet_double(&extract)),
    ])
}

/// Manifest declaring `class_name` absent.
#[must_use]
pub fn removal_manifest(class_name: &str) -> String {
    format!("  class {{ \"{class_name}\":\n    ensure => absent,\n  }}\n")
}
