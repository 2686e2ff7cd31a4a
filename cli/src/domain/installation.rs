//! IBM Installation Manager layout.
//!
//! The Installation Manager is a UI tool, so verifying an install only checks
//! that the launcher, the license text and the version metadata are in place.

use std::fmt;

/// Conventional install location when the `ibm_installation_manager` class
/// is applied without a `target`.
pub const DEFAULT_IM_DIRECTORY: &str = "/opt/IBM/InstallationManager";

/// An artifact an Installation Manager install must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Launcher,
    License,
    Version,
}

impl Artifact {
    /// Checked in this order; verification stops at the first miss.
    pub const ALL: [Self; 3] = [Self::Launcher, Self::License, Self::Version];

    /// Path to test, relative to the install directory. `Version` is a glob.
    #[must_use]
    pub fn relative_path(self) -> &'static str {
        match self {
            Self::Launcher => "eclipse/launcher",
            Self::License => "license/es/license.txt",
            Self::Version => "properties/version/IBM_Installation_Manager.*",
        }
    }

    /// Directory named in the failure message, relative to the install directory.
    #[must_use]
    pub fn relative_location(self) -> &'static str {
        match self {
            Self::Launcher => "eclipse",
            Self::License => "license",
            Self::Version => "properties/version",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Launcher => "IBM Installation Manager Launcher",
            Self::License => "IBM Installation Manager License File",
            Self::Version => "IBM Installation Manager Version",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Launcher => "Launcher",
            Self::License => "License file",
            Self::Version => "Version",
        })
    }
}

/// One planned existence check against an install directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheck {
    pub artifact: Artifact,
    /// Exact path queried on the host.
    pub path: String,
    /// Directory reported when the check fails.
    pub location: String,
}

/// The ordered checks for an Installation Manager installed under `dir`.
#[must_use]
pub fn artifact_checks(dir: &str) -> Vec<ArtifactCheck> {
    let base = dir.trim_end_matches('/');
    Artifact::ALL
        .iter()
        .map(|&artifact| ArtifactCheck {
            artifact,
            path: format!("{base}/{}", artifact.relative_path()),
            location: format!("{base}/{}", artifact.relative_location()),
        })
        .collect()
}
