//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. Both enums implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.
//!
//! The split between the two enums is what test reporting relies on:
//! an [`AssertionFailure`] means the host under test is not in the expected
//! state, anything else means the harness or the test definition is broken.

use thiserror::Error;

use crate::domain::installation::Artifact;

// ── Assertion failures ────────────────────────────────────────────────────────

/// The system under test did not reach the expected state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    #[error("only zip or tar.gz are valid compressed files, got '{file_name}'")]
    UnsupportedArchive { file_name: String },

    #[error("Failed to download and/or uncompress: puppet apply exited with {}", describe_code(.code))]
    UnacceptedExitCode { code: Option<i32> },

    #[error("Failed to download and/or uncompress: output contains 'Error': {line}")]
    ErrorInOutput { line: String },

    #[error("{artifact} has not been found in: {location}")]
    MissingArtifact {
        artifact: Artifact,
        location: String,
        checked: String,
    },

    #[error("File/Directory does not exist: {path}")]
    MissingPath { path: String },
}

#[allow(clippy::ref_option)]
fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code (terminated by signal)".to_string(), |c| format!("code {c}"))
}

// ── Internal errors ───────────────────────────────────────────────────────────

/// The test definition or the harness itself is malformed.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("verification target must be a path or a list of paths, got {found}")]
    InvalidTarget { found: String },

    #[error("template '{template}' references '{placeholder}' but no value was supplied")]
    UnboundPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("template '{name}' not found under {root}")]
    TemplateNotFound { name: String, root: String },

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

// ── Classification ────────────────────────────────────────────────────────────

/// Which side of the test a failure blames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The system under test is broken.
    Assertion,
    /// The test itself, or the harness running it, is broken.
    Internal,
}

impl FailureKind {
    /// Classify an error by walking its whole context chain.
    #[must_use]
    pub fn of(err: &anyhow::Error) -> Self {
        if err
            .chain()
            .any(|cause| cause.downcast_ref::<AssertionFailure>().is_some())
        {
            Self::Assertion
        } else {
            Self::Internal
        }
    }

    /// Process exit code used by the CLI for this kind of failure.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Assertion => 1,
            Self::Internal => 3,
        }
    }
}
