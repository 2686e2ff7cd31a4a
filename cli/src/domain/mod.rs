//! Domain layer — pure types, classification and manifest construction.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod apply;
pub mod archive;
pub mod config;
pub mod error;
pub mod installation;
pub mod manifest;
pub mod shell;
pub mod suite;
pub mod target;

pub use apply::{ACCEPTED_EXIT_CODES, ERROR_MARKER, check_apply};
pub use archive::{ArchiveKind, ArchiveSpec};
pub use config::{HostSpec, Settings, validate_settings};
pub use error::{AssertionFailure, FailureKind, InternalError};
pub use installation::{Artifact, DEFAULT_IM_DIRECTORY, artifact_checks};
pub use manifest::{FETCH_TEMPLATE, REMOVAL_MANIFEST_PATH, removal_manifest};
pub use suite::{Step, StepOutcome, Suite, SuiteReport};
pub use target::PathTarget;
