//! Application service — run an acceptance suite step by step.
//!
//! A failure is fatal to its step only. Whether later steps run is the
//! suite's `continue_on_failure` decision.

use anyhow::Result;

use crate::application::ports::{ProgressReporter, RemoteHost, TemplateSource};
use crate::application::services::{archive_fetch, install_check, path_check, uninstall};
use crate::domain::error::FailureKind;
use crate::domain::suite::{Step, StepOutcome, StepResult, Suite, SuiteReport};

/// Run one step against `host`.
///
/// # Errors
///
/// Propagates the step's assertion failure or internal error.
pub async fn run_step(
    host: &impl RemoteHost,
    templates: &impl TemplateSource,
    reporter: &impl ProgressReporter,
    step: &Step,
) -> Result<()> {
    match step {
        Step::Fetch(spec) => archive_fetch::fetch_and_extract(host, templates, reporter, spec).await,
        Step::VerifyInstall { dir } => {
            install_check::verify_installation_manager(host, reporter, dir).await
        }
        Step::VerifyPaths(target) => path_check::verify_paths_exist(host, reporter, target).await,
        Step::Uninstall { class } => uninstall::remove_class(host, reporter, class).await,
    }
}

/// Run every step of `suite`, collecting one result per step.
pub async fn run_suite(
    host: &impl RemoteHost,
    templates: &impl TemplateSource,
    reporter: &impl ProgressReporter,
    suite: &Suite,
) -> SuiteReport {
    let mut report = SuiteReport {
        host: host.name().to_string(),
        results: Vec::with_capacity(suite.steps.len()),
    };
    let mut halted = false;

    for (index, step) in suite.steps.iter().enumerate() {
        let label = step.label();
        let outcome = if halted {
            StepOutcome::Skipped
        } else {
            match run_step(host, templates, reporter, step).await {
                Ok(()) => StepOutcome::Passed,
                Err(e) => {
                    let kind = FailureKind::of(&e);
                    let message = format!("{e:#}");
                    tracing::warn!(step = index + 1, ?kind, %message, "step failed");
                    reporter.warn(&format!("step {} ({label}) failed: {message}", index + 1));
                    halted = !suite.continue_on_failure;
                    StepOutcome::Failed { kind, message }
                }
            }
        };
        report.results.push(StepResult {
            index: index + 1,
            step: label,
            outcome,
        });
    }
    report
}
