//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()`. Hosts are built on demand
//! because a suite file may name its own host.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ProgressReporter;
use crate::domain::config::{HostSpec, Settings};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::{load_settings, settings_path};
use crate::infra::host::{ShellHost, Transport};
use crate::infra::templates::FsTemplateSource;
use crate::output::progress::SpinnerReporter;
use crate::output::reporter::{SilentReporter, TerminalReporter};
use crate::output::{HumanRenderer, OutputContext};

/// Host used when neither `--host` nor the suite names one.
pub const DEFAULT_HOST: &str = "local";

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags<'a> {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    /// Explicit settings file.
    pub config: Option<&'a Path>,
    /// Host given on the command line or via `WAS_ACCEPT_HOST`.
    pub host: Option<String>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Loaded harness settings.
    pub settings: Settings,
    /// Manifest templates, rooted at `FILES` or `settings.template_root`.
    pub templates: FsTemplateSource,
    /// Host requested on the command line, if any.
    pub host_override: Option<String>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded.
    pub fn new(flags: AppFlags<'_>) -> Result<Self> {
        let path = settings_path(flags.config);
        let settings = load_settings(path.as_deref()).context("loading settings")?;
        let templates = FsTemplateSource::from_env_or(&settings.template_root);
        tracing::debug!(templates = %templates.root().display(), "template root");

        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            settings,
            templates,
            host_override: flags.host,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Build the host to run against: the command-line host, then
    /// `fallback`, then [`DEFAULT_HOST`].
    ///
    /// # Errors
    ///
    /// Returns an error if the host spec is malformed.
    pub fn host(&self, fallback: Option<&str>) -> Result<ShellHost<TokioCommandRunner>> {
        let spec = self
            .host_override
            .as_deref()
            .or(fallback)
            .unwrap_or(DEFAULT_HOST);
        let spec = HostSpec::parse(spec)?;
        let transport = Transport::from_spec(&spec, &self.settings.ssh);
        Ok(ShellHost::new(
            transport,
            TokioCommandRunner::new(self.settings.command_timeout()),
            self.settings.apply_timeout(),
        ))
    }

    /// Returns the reporter matching the output mode and terminal.
    #[must_use]
    pub fn reporter(&self) -> Reporter<'_> {
        if self.is_json() {
            Reporter::Silent(SilentReporter)
        } else if self.output.show_progress() {
            Reporter::Spinner(SpinnerReporter::new())
        } else {
            Reporter::Terminal(TerminalReporter::new(&self.output))
        }
    }

    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }
}

/// Progress reporter chosen at runtime.
pub enum Reporter<'a> {
    Terminal(TerminalReporter<'a>),
    Spinner(SpinnerReporter),
    Silent(SilentReporter),
}

impl ProgressReporter for Reporter<'_> {
    fn step(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.step(message),
            Self::Spinner(r) => r.step(message),
            Self::Silent(r) => r.step(message),
        }
    }

    fn success(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.success(message),
            Self::Spinner(r) => r.success(message),
            Self::Silent(r) => r.success(message),
        }
    }

    fn warn(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.warn(message),
            Self::Spinner(r) => r.warn(message),
            Self::Silent(r) => r.warn(message),
        }
    }
}
