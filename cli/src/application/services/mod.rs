//! Application services — use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports` — never from `crate::infra` or `crate::output`.

pub mod archive_fetch;
pub mod install_check;
pub mod path_check;
pub mod suite_runner;
pub mod uninstall;

pub use archive_fetch::{fetch_and_extract, render_fetch_manifest};
pub use install_check::verify_installation_manager;
pub use path_check::verify_paths_exist;
pub use suite_runner::{run_step, run_suite};
pub use uninstall::remove_class;
