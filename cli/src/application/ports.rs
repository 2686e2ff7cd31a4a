//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::output`.

use std::process::Output;
use std::time::Duration;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts local process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Run a program with stdin piped from `input`, under `timeout`.
    async fn run_with_stdin(
        &self,
        program: &str,
        args: &[&str],
        input: &[u8],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Remote Host Port ──────────────────────────────────────────────────────────

/// The machine under test.
///
/// Commands are argument vectors; implementations quote them for whatever
/// shell they go through. A non-zero exit is returned in `Output`, not as an
/// `Err`. Only transport failures are errors.
#[allow(async_fn_in_trait)]
pub trait RemoteHost {
    /// Display name used in progress and log messages.
    fn name(&self) -> &str;
    /// Whether anything exists at `path`. `*` and `?` in `path` are globs.
    async fn file_exists(&self, path: &str) -> Result<bool>;
    /// Run a command on the host and capture its output.
    async fn exec(&self, args: &[&str]) -> Result<Output>;
    /// Run a long command on the host with stdin piped from `input`.
    async fn exec_with_stdin(&self, args: &[&str], input: &[u8]) -> Result<Output>;
    /// Create or replace the file at `path` with `contents`.
    async fn write_file(&self, path: &str, contents: &str) -> Result<()>;
}

// ── Template Port ─────────────────────────────────────────────────────────────

/// Loads manifest template sources by file name.
pub trait TemplateSource {
    /// Return the raw template text.
    ///
    /// # Errors
    ///
    /// Returns `InternalError::TemplateNotFound` when no template has that name.
    fn load(&self, name: &str) -> Result<String>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
