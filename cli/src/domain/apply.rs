//! Interpretation of `puppet apply` results.

use crate::domain::error::AssertionFailure;

/// With `--detailed-exitcodes`: 0 = no changes, 2 = changes applied.
pub const ACCEPTED_EXIT_CODES: &[i32] = &[0, 2];

/// Marker whose presence in apply output fails the run regardless of exit code.
pub const ERROR_MARKER: &str = "Error";

/// Check an apply result: exit code first, then the combined output.
///
/// # Errors
///
/// [`AssertionFailure::UnacceptedExitCode`] when `code` is not accepted (or
/// absent), [`AssertionFailure::ErrorInOutput`] when the output contains
/// [`ERROR_MARKER`].
pub fn check_apply(code: Option<i32>, output: &str) -> Result<(), AssertionFailure> {
    if !code.is_some_and(|c| ACCEPTED_EXIT_CODES.contains(&c)) {
        return Err(AssertionFailure::UnacceptedExitCode { code });
    }
    if let Some(line) = output.lines().find(|line| line.contains(ERROR_MARKER)) {
        return Err(AssertionFailure::ErrorInOutput {
            line: line.trim().to_string(),
        });
    }
    Ok(())
}
