//! Command implementations

pub mod fetch;
pub mod run;
pub mod uninstall;
pub mod verify;
pub mod version;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// Print the JSON success object for a single operation.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn finish(app: &AppContext, operation: &str) -> Result<i32> {
    if app.is_json() {
        println!("{}", json::format_ok(operation)?);
    }
    Ok(0)
}
