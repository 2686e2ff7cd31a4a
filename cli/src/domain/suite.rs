//! Acceptance suite definitions and run reports.

use serde::{Deserialize, Serialize};

use crate::domain::archive::ArchiveSpec;
use crate::domain::error::FailureKind;
use crate::domain::target::PathTarget;

/// A YAML acceptance suite: ordered steps against a single host.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Suite {
    /// Host spec; the `--host` flag wins when given explicitly.
    #[serde(default)]
    pub host: Option<String>,
    /// Keep running steps after a failure instead of skipping the rest.
    #[serde(default)]
    pub continue_on_failure: bool,
    pub steps: Vec<Step>,
}

/// One helper invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    Fetch(ArchiveSpec),
    VerifyInstall { dir: String },
    VerifyPaths(PathTarget),
    Uninstall { class: String },
}

impl Step {
    /// Short human label used in reports.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Fetch(spec) => format!("fetch {} into {}", spec.file, spec.dest),
            Self::VerifyInstall { dir } => format!("verify installation manager in {dir}"),
            Self::VerifyPaths(target) => match target {
                PathTarget::One(path) => format!("verify {path}"),
                PathTarget::Many(paths) => format!("verify {} paths", paths.len()),
            },
            Self::Uninstall { class } => format!("uninstall {class}"),
        }
    }
}

/// How a step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Passed,
    Failed { kind: FailureKind, message: String },
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub index: usize,
    pub step: String,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Results of a suite run, in step order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub host: String,
    pub results: Vec<StepResult>,
}

impl SuiteReport {
    /// The most severe failure kind: an internal error outranks an assertion.
    #[must_use]
    pub fn worst_failure(&self) -> Option<FailureKind> {
        let kinds = self.results.iter().filter_map(|r| match r.outcome {
            StepOutcome::Failed { kind, .. } => Some(kind),
            _ => None,
        });
        kinds.fold(None, |worst, kind| match (worst, kind) {
            (Some(FailureKind::Internal), _) | (_, FailureKind::Internal) => {
                Some(FailureKind::Internal)
            }
            _ => Some(FailureKind::Assertion),
        })
    }

    #[must_use]
    pub fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}
