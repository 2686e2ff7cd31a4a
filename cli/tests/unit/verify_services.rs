//! Tests for the installed-product and generic existence verifiers.

use websphere_acceptance::application::services::{
    verify_installation_manager, verify_paths_exist,
};
use websphere_acceptance::domain::{Artifact, AssertionFailure, FailureKind, PathTarget};

use crate::mocks::{MockHost, RecordingReporter};

const IM: &str = "/opt/IBM/InstallationManager";
const LAUNCHER: &str = "/opt/IBM/InstallationManager/eclipse/launcher";
const LICENSE: &str = "/opt/IBM/InstallationManager/license/es/license.txt";
const VERSION: &str = "/opt/IBM/InstallationManager/properties/version/IBM_Installation_Manager.*";

// ── verify_installation_manager ──────────────────────────────────────────────

#[tokio::test]
async fn complete_install_checks_three_paths_in_order() {
    let host = MockHost::new().with_existing([LAUNCHER, LICENSE, VERSION]);
    let reporter = RecordingReporter::default();

    verify_installation_manager(&host, &reporter, IM)
        .await
        .expect("all present");

    assert_eq!(host.checked_paths(), [LAUNCHER, LICENSE, VERSION]);
    let events = reporter.events();
    assert_eq!(
        events[0],
        "step: Verify IBM Installation Manager is installed into directory: /opt/IBM/InstallationManager"
    );
    assert_eq!(events[1], "step: Verify 1/3: IBM Installation Manager Launcher");
    assert_eq!(events[3], "step: Verify 3/3: IBM Installation Manager Version");
}

#[tokio::test]
async fn missing_launcher_stops_before_license() {
    let host = MockHost::new().with_existing([LICENSE, VERSION]);

    let err = verify_installation_manager(&host, &RecordingReporter::default(), IM)
        .await
        .expect_err("launcher missing");

    assert_eq!(host.checked_paths(), [LAUNCHER]);
    assert_eq!(
        err.to_string(),
        "Launcher has not been found in: /opt/IBM/InstallationManager/eclipse"
    );
}

#[tokio::test]
async fn missing_version_reports_glob_path() {
    let host = MockHost::new().with_existing([LAUNCHER, LICENSE]);

    let err = verify_installation_manager(&host, &RecordingReporter::default(), IM)
        .await
        .expect_err("version missing");

    assert_eq!(
        err.downcast_ref::<AssertionFailure>(),
        Some(&AssertionFailure::MissingArtifact {
            artifact: Artifact::Version,
            location: "/opt/IBM/InstallationManager/properties/version".to_string(),
            checked: VERSION.to_string(),
        })
    );
    assert_eq!(host.checked_paths().len(), 3);
}

#[tokio::test]
async fn license_message_names_license_directory() {
    let host = MockHost::new().with_existing([LAUNCHER, VERSION]);

    let err = verify_installation_manager(&host, &RecordingReporter::default(), "/srv/im")
        .await
        .expect_err("license missing");

    assert_eq!(err.to_string(), "License file has not been found in: /srv/im/license");
    assert_eq!(host.checked_paths(), ["/srv/im/eclipse/launcher", "/srv/im/license/es/license.txt"]);
}

// ── verify_paths_exist ───────────────────────────────────────────────────────

#[tokio::test]
async fn single_path_is_checked_once() {
    let host = MockHost::new().with_existing(["/opt/log/websphere"]);

    verify_paths_exist(&host, &RecordingReporter::default(), &PathTarget::from("/opt/log/websphere"))
        .await
        .expect("exists");

    assert_eq!(host.checked_paths(), ["/opt/log/websphere"]);
}

#[tokio::test]
async fn missing_single_path_is_an_assertion() {
    let host = MockHost::new();

    let err = verify_paths_exist(&host, &RecordingReporter::default(), &PathTarget::from("/nope"))
        .await
        .expect_err("absent");

    assert_eq!(FailureKind::of(&err), FailureKind::Assertion);
    assert_eq!(err.to_string(), "File/Directory does not exist: /nope");
}

#[tokio::test]
async fn first_missing_path_wins_and_later_paths_are_not_checked() {
    let host = MockHost::new().with_existing(["/a", "/b", "/d"]);
    let target = PathTarget::Many(vec![
        "/a".to_string(),
        "/b".to_string(),
        "/c".to_string(),
        "/d".to_string(),
    ]);

    let err = verify_paths_exist(&host, &RecordingReporter::default(), &target)
        .await
        .expect_err("/c absent");

    assert_eq!(
        err.downcast_ref::<AssertionFailure>(),
        Some(&AssertionFailure::MissingPath {
            path: "/c".to_string()
        })
    );
    assert_eq!(host.checked_paths(), ["/a", "/b", "/c"]);
}

#[tokio::test]
async fn empty_list_passes_without_queries() {
    let host = MockHost::new();

    verify_paths_exist(&host, &RecordingReporter::default(), &PathTarget::Many(Vec::new()))
        .await
        .expect("vacuously true");

    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_is_not_an_assertion() {
    let host = MockHost::new().unreachable();

    let err = verify_paths_exist(&host, &RecordingReporter::default(), &PathTarget::from("/a"))
        .await
        .expect_err("host down");

    assert_eq!(FailureKind::of(&err), FailureKind::Internal);
}
