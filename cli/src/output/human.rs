//! Human-readable terminal renderer.

use crate::domain::suite::{StepOutcome, SuiteReport};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        self.ctx.info(&format!("was-accept v{version}"));
    }

    /// Render a suite report: one line per step, then totals.
    pub fn render_report(&self, report: &SuiteReport) {
        self.ctx.header(&format!("Suite results on {}:", report.host));
        for result in &report.results {
            let line = format!("{}. {}", result.index, result.step);
            match &result.outcome {
                StepOutcome::Passed => self.ctx.success(&line),
                StepOutcome::Failed { message, .. } => {
                    self.ctx.error(&format!("{line}: {message}"));
                }
                StepOutcome::Skipped => self.ctx.skipped(&format!("{line} (skipped)")),
            }
        }
        let passed = report.count(|o| matches!(o, StepOutcome::Passed));
        let failed = report.count(|o| matches!(o, StepOutcome::Failed { .. }));
        let skipped = report.count(|o| matches!(o, StepOutcome::Skipped));
        self.ctx
            .info(&format!("{passed} passed, {failed} failed, {skipped} skipped"));
    }
}
