//! Unit tests for was-accept
//!
//! These tests use mocked hosts and runners and run fast without external I/O.

#![allow(clippy::expect_used)]

mod architecture;
mod host_tests;
mod verify_services;
