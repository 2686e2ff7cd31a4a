//! `verify-install` and `verify-paths` commands.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{verify_installation_manager, verify_paths_exist};
use crate::domain::installation::DEFAULT_IM_DIRECTORY;
use crate::domain::target::PathTarget;

/// Arguments for the verify-install command.
#[derive(Args)]
pub struct VerifyInstallArgs {
    /// Installation Manager directory
    #[arg(default_value = DEFAULT_IM_DIRECTORY)]
    pub dir: String,
}

/// Arguments for the verify-paths command.
#[derive(Args)]
pub struct VerifyPathsArgs {
    /// Files or directories that must exist, checked in order
    #[arg(required = true)]
    pub paths: Vec<String>,
}

/// Run the verify-install command.
///
/// # Errors
///
/// Returns an error naming the first missing artifact.
pub async fn install(app: &AppContext, args: &VerifyInstallArgs) -> Result<i32> {
    let host = app.host(None)?;
    verify_installation_manager(&host, &app.reporter(), &args.dir).await?;
    super::finish(app, "verify-install")
}

/// Run the verify-paths command.
///
/// # Errors
///
/// Returns an error naming the first missing path.
pub async fn paths(app: &AppContext, args: VerifyPathsArgs) -> Result<i32> {
    let host = app.host(None)?;
    let mut paths = args.paths;
    let target = if paths.len() == 1 {
        PathTarget::One(paths.remove(0))
    } else {
        PathTarget::Many(paths)
    };
    verify_paths_exist(&host, &app.reporter(), &target).await?;
    super::finish(app, "verify-paths")
}
