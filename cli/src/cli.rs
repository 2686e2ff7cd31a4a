//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Acceptance-test helpers for provisioning and verifying IBM WebSphere
#[derive(Parser)]
#[command(
    name = "was-accept",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Host to run against: `local` or `[user@]host` (reached with ssh)
    #[arg(long, global = true, env = "WAS_ACCEPT_HOST")]
    pub host: Option<String>,

    /// Settings file (YAML)
    #[arg(long, global = true, env = "WAS_ACCEPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download an installer archive and uncompress it on the host
    Fetch(commands::fetch::ArchiveArgs),

    /// Print the fetch manifest without applying it
    Render(commands::fetch::ArchiveArgs),

    /// Verify IBM Installation Manager is installed in a directory
    VerifyInstall(commands::verify::VerifyInstallArgs),

    /// Verify files or directories exist on the host
    VerifyPaths(commands::verify::VerifyPathsArgs),

    /// Declare a Puppet class absent and apply it
    Uninstall(commands::uninstall::UninstallArgs),

    /// Run a YAML acceptance suite
    Run(commands::run::RunArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command and return the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded or the command fails.
    pub async fn run(self) -> Result<i32> {
        let Cli {
            host,
            config,
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            no_color,
            quiet,
            json,
            config: config.as_deref(),
            host,
        })?;

        match command {
            Command::Fetch(args) => commands::fetch::run(&app, &args).await,
            Command::Render(args) => commands::fetch::render(&app, &args),
            Command::VerifyInstall(args) => commands::verify::install(&app, &args).await,
            Command::VerifyPaths(args) => commands::verify::paths(&app, args).await,
            Command::Uninstall(args) => commands::uninstall::run(&app, &args).await,
            Command::Run(args) => commands::run::run(&app, &args).await,
            Command::Version => Ok(commands::version::run(&app)),
        }
    }
}
