//! `uninstall` command — apply a removal manifest for a Puppet class.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::remove_class;

/// Arguments for the uninstall command.
#[derive(Args)]
pub struct UninstallArgs {
    /// Puppet class to declare absent, e.g. websphere_application_server
    pub class: String,
}

/// Run the uninstall command.
///
/// # Errors
///
/// Returns an error if writing or applying the removal manifest fails.
pub async fn run(app: &AppContext, args: &UninstallArgs) -> Result<i32> {
    let host = app.host(None)?;
    remove_class(&host, &app.reporter(), &args.class).await?;
    super::finish(app, "uninstall")
}
