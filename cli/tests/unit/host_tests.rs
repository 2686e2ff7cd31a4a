//! Unit tests for `ShellHost`.
//!
//! These tests verify that `ShellHost` builds the right program/argument
//! lists for each transport and maps exit codes to results, without spawning
//! real processes.

use std::process::Output;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use websphere_acceptance::application::ports::{CommandRunner, RemoteHost};
use websphere_acceptance::infra::host::{ShellHost, Transport};

use crate::mocks::output;

// ─── MockCommandRunner ────────────────────────────────────────────────────────

/// One recorded runner invocation. `timeout` is `None` when the caller left
/// it to the runner's default.
#[derive(Debug, Clone)]
struct RunnerCall {
    program: String,
    args: Vec<String>,
    stdin: Option<String>,
    timeout: Option<Duration>,
}

/// Records every call and replays a canned output.
#[derive(Clone)]
struct MockCommandRunner {
    calls: Arc<Mutex<Vec<RunnerCall>>>,
    code: i32,
    stderr: &'static str,
}

impl MockCommandRunner {
    fn exiting(code: i32) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            code,
            stderr: "",
        }
    }

    fn with_stderr(mut self, stderr: &'static str) -> Self {
        self.stderr = stderr;
        self
    }

    fn recorded_calls(&self) -> Vec<RunnerCall> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    fn record(
        &self,
        program: &str,
        args: &[&str],
        stdin: Option<&[u8]>,
        timeout: Option<Duration>,
    ) -> Output {
        self.calls.lock().expect("mutex poisoned").push(RunnerCall {
            program: program.to_owned(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
            stdin: stdin.map(|b| String::from_utf8_lossy(b).into_owned()),
            timeout,
        });
        output(self.code, "", self.stderr)
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        Ok(self.record(program, args, None, None))
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        Ok(self.record(program, args, None, Some(timeout)))
    }

    async fn run_with_stdin(
        &self,
        program: &str,
        args: &[&str],
        input: &[u8],
        timeout: Duration,
    ) -> Result<Output> {
        Ok(self.record(program, args, Some(input), Some(timeout)))
    }
}

const APPLY_TIMEOUT: Duration = Duration::from_secs(1800);

fn ssh_transport() -> Transport {
    Transport::Ssh {
        destination: "root@was-node".to_string(),
        port: None,
        identity_file: None,
    }
}

fn host(transport: Transport, runner: &MockCommandRunner) -> ShellHost<MockCommandRunner> {
    ShellHost::new(transport, runner.clone(), APPLY_TIMEOUT)
}

// ─── file_exists ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn local_file_exists_runs_sh_test() {
    let runner = MockCommandRunner::exiting(0);
    let exists = host(Transport::Local, &runner)
        .file_exists("/opt/log/websphere")
        .await
        .expect("runs");

    assert!(exists);
    let calls = runner.recorded_calls();
    assert_eq!(calls[0].program, "sh");
    assert_eq!(calls[0].args, ["-c", "[ -e '/opt/log/websphere' ]"]);
}

#[tokio::test]
async fn exit_one_means_absent() {
    let runner = MockCommandRunner::exiting(1);
    let exists = host(ssh_transport(), &runner)
        .file_exists("/nope")
        .await
        .expect("runs");
    assert!(!exists);
}

#[tokio::test]
async fn ssh_exit_255_is_a_transport_error() {
    let runner = MockCommandRunner::exiting(255).with_stderr("Connection refused");
    let err = host(ssh_transport(), &runner)
        .file_exists("/opt")
        .await
        .expect_err("ssh failed");
    assert!(format!("{err:#}").contains("Connection refused"), "{err:#}");
}

#[tokio::test]
async fn glob_paths_expand_on_the_host() {
    let runner = MockCommandRunner::exiting(0);
    host(ssh_transport(), &runner)
        .file_exists("/opt/IBM/properties/version/IBM_Installation_Manager.*")
        .await
        .expect("runs");

    let call = &runner.recorded_calls()[0];
    assert_eq!(call.program, "ssh");
    assert_eq!(call.args[..3], ["-o", "BatchMode=yes", "root@was-node"]);
    assert!(call.args[4].starts_with("for f in '/opt/IBM/properties/version/IBM_Installation_Manager.'*;"));
}

// ─── exec / write_file ───────────────────────────────────────────────────────

#[tokio::test]
async fn exec_with_stdin_pipes_manifest() {
    let runner = MockCommandRunner::exiting(2);
    let out = host(ssh_transport(), &runner)
        .exec_with_stdin(&["/opt/puppetlabs/puppet/bin/puppet", "apply"], b"class {}")
        .await
        .expect("runs");

    assert_eq!(out.status.code(), Some(2));
    let call = &runner.recorded_calls()[0];
    assert_eq!(call.args.last().map(String::as_str), Some("'/opt/puppetlabs/puppet/bin/puppet' 'apply'"));
    assert_eq!(call.stdin.as_deref(), Some("class {}"));
}

#[tokio::test]
async fn write_file_cats_into_quoted_path() {
    let runner = MockCommandRunner::exiting(0);
    host(Transport::Local, &runner)
        .write_file("/root/remove_websphere.pp", "class { 'x': ensure => absent }")
        .await
        .expect("writes");

    let call = &runner.recorded_calls()[0];
    assert_eq!(call.program, "sh");
    assert_eq!(call.args[1], "cat > '/root/remove_websphere.pp'");
    assert_eq!(call.stdin.as_deref(), Some("class { 'x': ensure => absent }"));
}

#[tokio::test]
async fn write_file_failure_is_an_error() {
    let runner = MockCommandRunner::exiting(1).with_stderr("Permission denied");
    let err = host(Transport::Local, &runner)
        .write_file("/root/x", "")
        .await
        .expect_err("denied");
    assert!(err.to_string().contains("Permission denied"), "{err}");
}

// ─── timeouts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn existence_checks_use_the_runner_default_timeout() {
    let runner = MockCommandRunner::exiting(0);
    host(ssh_transport(), &runner)
        .file_exists("/opt")
        .await
        .expect("runs");

    assert_eq!(runner.recorded_calls()[0].timeout, None);
}

#[tokio::test]
async fn puppet_runs_and_writes_use_the_apply_timeout() {
    let runner = MockCommandRunner::exiting(0);
    let host = host(ssh_transport(), &runner);

    host.exec(&["/opt/puppetlabs/puppet/bin/puppet", "apply", "/root/remove_websphere.pp"])
        .await
        .expect("exec");
    host.exec_with_stdin(&["/opt/puppetlabs/puppet/bin/puppet", "apply"], b"")
        .await
        .expect("exec with stdin");
    host.write_file("/root/remove_websphere.pp", "")
        .await
        .expect("write");

    let timeouts: Vec<_> = runner.recorded_calls().iter().map(|c| c.timeout).collect();
    assert_eq!(timeouts, [Some(APPLY_TIMEOUT); 3]);
}

#[test]
fn host_name_reflects_destination() {
    let runner = MockCommandRunner::exiting(0);
    assert_eq!(host(ssh_transport(), &runner).name(), "root@was-node");
    assert_eq!(host(Transport::Local, &runner).name(), "localhost");
}
