//! WebSphere acceptance helpers — exposes modules for the binary and tests.
//!
//! Four operations drive a host under test: [`fetch_and_extract`],
//! [`verify_installation_manager`], [`verify_paths_exist`] and
//! [`remove_class`]. Failures that blame the host are
//! [`domain::AssertionFailure`]s; use [`domain::FailureKind::of`] to tell
//! them apart from harness errors.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;

pub use application::services::{
    fetch_and_extract, remove_class, run_suite, verify_installation_manager, verify_paths_exist,
};
