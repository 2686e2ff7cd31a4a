//! `fetch` and `render` commands — download and unpack an installer archive.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{fetch_and_extract, render_fetch_manifest};
use crate::domain::archive::ArchiveSpec;

/// Arguments shared by `fetch` and `render`.
#[derive(Args)]
pub struct ArchiveArgs {
    /// Repository URL the archive is served from
    pub url: String,
    /// Archive file name (must contain `zip` or `tar.gz`)
    pub file: String,
    /// Directory on the host to download and uncompress into
    pub dest: String,
}

impl ArchiveArgs {
    fn spec(&self) -> ArchiveSpec {
        ArchiveSpec::new(&self.url, &self.file, &self.dest)
    }
}

/// Run the fetch command.
///
/// # Errors
///
/// Returns an error if the archive type is unsupported or the apply fails.
pub async fn run(app: &AppContext, args: &ArchiveArgs) -> Result<i32> {
    let host = app.host(None)?;
    fetch_and_extract(&host, &app.templates, &app.reporter(), &args.spec()).await?;
    super::finish(app, "fetch")
}

/// Print the rendered fetch manifest without applying it.
///
/// # Errors
///
/// Returns an error if the archive type is unsupported or rendering fails.
pub fn render(app: &AppContext, args: &ArchiveArgs) -> Result<i32> {
    let manifest = render_fetch_manifest(&app.templates, &args.spec())?;
    if app.is_json() {
        println!("{}", serde_json::json!({ "manifest": manifest }));
    } else {
        print!("{manifest}");
    }
    Ok(0)
}
