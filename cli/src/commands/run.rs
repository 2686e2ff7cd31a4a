//! `run` command — execute a YAML acceptance suite.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::run_suite;
use crate::domain::suite::Suite;
use crate::output::json;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Suite file (YAML)
    pub suite: PathBuf,
}

/// Load a suite file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a suite.
pub fn load_suite(path: &std::path::Path) -> Result<Suite> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}

/// Run the suite and render its report. The exit code reflects the worst
/// failure kind in the report.
///
/// # Errors
///
/// Returns an error if the suite cannot be loaded or its host is malformed.
pub async fn run(app: &AppContext, args: &RunArgs) -> Result<i32> {
    let suite = load_suite(&args.suite)?;
    let host = app.host(suite.host.as_deref())?;
    let report = {
        let reporter = app.reporter();
        run_suite(&host, &app.templates, &reporter, &suite).await
    };

    if app.is_json() {
        println!("{}", json::format_report(&report)?);
    } else {
        app.renderer().render_report(&report);
    }
    Ok(report.worst_failure().map_or(0, |kind| kind.exit_code()))
}
