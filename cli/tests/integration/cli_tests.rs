//! Integration tests for the CLI surface: help, version, render.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

pub fn was_accept() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("was-accept"));
    cmd.env("NO_COLOR", "1")
        .env_remove("WAS_ACCEPT_HOST")
        .env_remove("WAS_ACCEPT_CONFIG")
        .env_remove("FILES");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    was_accept().assert().code(2).stderr(predicate::str::contains(
        "Acceptance-test helpers for provisioning and verifying IBM WebSphere",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    was_accept()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify-install"))
        .stdout(predicate::str::contains("verify-paths"))
        .stdout(predicate::str::contains("uninstall"));
}

#[test]
fn test_version_command_json() {
    let out = was_accept()
        .args(["version", "--json"])
        .output()
        .expect("runs");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_render_prints_manifest_from_default_template_root() {
    was_accept()
        .args(["render", "http://repo/QA/", "was.repo.8550.zip", "/ibminstallers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("curl -fsSL -o '/ibminstallers/was.repo.8550.zip' 'http://repo/QA/was.repo.8550.zip'"))
        .stdout(predicate::str::contains("unzip -o"));
}

#[test]
fn test_render_honours_files_env() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("download_uncompress_manifest.pp.tmpl"),
        "custom {{ compress_type }} {{ dest_directory }}\n",
    )
    .expect("write");

    was_accept()
        .env("FILES", dir.path())
        .args(["render", "http://repo", "a.tar.gz", "/d"])
        .assert()
        .success()
        .stdout("custom tar.gz /d\n");
}

#[test]
fn test_unsupported_archive_exits_with_assertion_code() {
    was_accept()
        .args(["render", "http://repo", "was.rar", "/d"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only zip or tar.gz"));
}

#[test]
fn test_missing_template_exits_with_internal_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    was_accept()
        .env("FILES", dir.path())
        .args(["render", "http://repo", "a.zip", "/d"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_host_is_internal() {
    was_accept()
        .args(["--host", "root@", "verify-paths", "/"])
        .assert()
        .code(3);
}
