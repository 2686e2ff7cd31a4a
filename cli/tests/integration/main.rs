//! Integration tests for was-accept
//!
//! These tests spawn the actual binary against the local host.

mod cli_tests;
