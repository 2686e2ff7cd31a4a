//! JSON output helpers.
//!
//! Used by every `--json` code path. Reports and errors are pretty-printed
//! objects on stdout.

use anyhow::{Context, Result};

use crate::domain::error::FailureKind;
use crate::domain::suite::SuiteReport;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "kind": "assertion",
///   "message": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, kind: FailureKind) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "kind": kind,
        "message": message,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a single passed operation.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_ok(operation: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": false,
        "operation": operation,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a suite report with pass/fail/skip totals.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &SuiteReport) -> Result<String> {
    let obj = serde_json::json!({
        "host": report.host,
        "passed": report.count(|o| matches!(o, crate::domain::StepOutcome::Passed)),
        "failed": report.count(|o| matches!(o, crate::domain::StepOutcome::Failed { .. })),
        "skipped": report.count(|o| matches!(o, crate::domain::StepOutcome::Skipped)),
        "results": report.results,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
