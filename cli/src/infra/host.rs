//! Infrastructure implementation of the `RemoteHost` port.
//!
//! `ShellHost<R>` turns host operations into POSIX shell scripts and runs
//! them through a `CommandRunner`, either locally with `sh -c` or over
//! `ssh` in batch mode.

use std::process::Output;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, RemoteHost};
use crate::domain::config::{HostSpec, SshSettings};
use crate::domain::shell::{glob_quote, join_quoted, quote};

/// How scripts reach the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Local,
    Ssh {
        destination: String,
        port: Option<u16>,
        identity_file: Option<String>,
    },
}

impl Transport {
    /// Build a transport from a parsed host spec, filling gaps from settings.
    #[must_use]
    pub fn from_spec(spec: &HostSpec, ssh: &SshSettings) -> Self {
        match spec {
            HostSpec::Local => Self::Local,
            HostSpec::Ssh { user, host } => {
                let user = user.as_ref().or(ssh.user.as_ref());
                Self::Ssh {
                    destination: match user {
                        Some(user) => format!("{user}@{host}"),
                        None => host.clone(),
                    },
                    port: ssh.port,
                    identity_file: ssh.identity_file.clone(),
                }
            }
        }
    }

    /// Program and arguments that run `script` on the host.
    #[must_use]
    pub fn command(&self, script: &str) -> (&'static str, Vec<String>) {
        match self {
            Self::Local => ("sh", vec!["-c".to_string(), script.to_string()]),
            Self::Ssh {
                destination,
                port,
                identity_file,
            } => {
                let mut args = vec!["-o".to_string(), "BatchMode=yes".to_string()];
                if let Some(port) = port {
                    args.extend(["-p".to_string(), port.to_string()]);
                }
                if let Some(key) = identity_file {
                    args.extend(["-i".to_string(), key.clone()]);
                }
                args.extend([destination.clone(), "--".to_string(), script.to_string()]);
                ("ssh", args)
            }
        }
    }
}

/// A host reached through a shell, local or remote.
pub struct ShellHost<R: CommandRunner> {
    name: String,
    transport: Transport,
    runner: R,
    apply_timeout: Duration,
}

impl<R: CommandRunner> ShellHost<R> {
    /// `apply_timeout` bounds `exec`, `exec_with_stdin` and `write_file`;
    /// existence checks use the runner's own timeout.
    pub fn new(transport: Transport, runner: R, apply_timeout: Duration) -> Self {
        let name = match &transport {
            Transport::Local => "localhost".to_string(),
            Transport::Ssh { destination, .. } => destination.clone(),
        };
        Self {
            name,
            transport,
            runner,
            apply_timeout,
        }
    }

    async fn run_script(&self, script: &str, timeout: Option<Duration>) -> Result<Output> {
        let (program, args) = self.transport.command(script);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = match timeout {
            Some(timeout) => self.runner.run_with_timeout(program, &args, timeout).await?,
            None => self.runner.run(program, &args).await?,
        };
        ensure_transport_ok(&self.transport, &output)?;
        Ok(output)
    }
}

impl<R: CommandRunner> RemoteHost for ShellHost<R> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn file_exists(&self, path: &str) -> Result<bool> {
        let script = exists_script(path);
        let output = self
            .run_script(&script, None)
            .await
            .with_context(|| format!("file check on {}", self.name))?;
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            code => anyhow::bail!(
                "file check for {path} on {} exited with {code:?}: {}",
                self.name,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
    }

    async fn exec(&self, args: &[&str]) -> Result<Output> {
        self.run_script(&join_quoted(args), Some(self.apply_timeout))
            .await
            .with_context(|| format!("exec on {}", self.name))
    }

    async fn exec_with_stdin(&self, args: &[&str], input: &[u8]) -> Result<Output> {
        let (program, transport_args) = self.transport.command(&join_quoted(args));
        let transport_args: Vec<&str> = transport_args.iter().map(String::as_str).collect();
        let output = self
            .runner
            .run_with_stdin(program, &transport_args, input, self.apply_timeout)
            .await
            .with_context(|| format!("exec on {}", self.name))?;
        ensure_transport_ok(&self.transport, &output)?;
        Ok(output)
    }

    async fn write_file(&self, path: &str, contents: &str) -> Result<()> {
        let script = format!("cat > {}", quote(path));
        let (program, args) = self.transport.command(&script);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self
            .runner
            .run_with_stdin(program, &args, contents.as_bytes(), self.apply_timeout)
            .await
            .with_context(|| format!("writing {path} on {}", self.name))?;
        if !output.status.success() {
            anyhow::bail!(
                "writing {path} on {} failed: {}",
                self.name,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// `ssh` reserves exit code 255 for its own connection failures.
fn ensure_transport_ok(transport: &Transport, output: &Output) -> Result<()> {
    if matches!(transport, Transport::Ssh { .. }) && output.status.code() == Some(255) {
        anyhow::bail!(
            "ssh connection failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}

// ── Existence checks ─────────────────────────────────────────────────────────

/// Script exiting 0 if anything matches `path`, 1 otherwise.
///
/// A glob with no match stays literal in sh, so each expansion is re-tested.
#[must_use]
pub fn exists_script(path: &str) -> String {
    if path.contains(['*', '?']) {
        format!(
            "for f in {}; do [ -e \"$f\" ] && exit 0; done; exit 1",
            glob_quote(path)
        )
    } else {
        format!("[ -e {} ]", quote(path))
    }
}
