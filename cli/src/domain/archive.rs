//! Installer archive descriptors and archive-type classification.
//!
//! Pure functions only: classification happens before any host is touched.

use std::fmt;

use crate::domain::error::AssertionFailure;
use crate::domain::shell::quote;

/// Compression formats the fetch manifest knows how to unpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    /// Classify an archive by substring match on its file name.
    ///
    /// `"zip"` is tested before `"tar.gz"`, so a name containing both is a zip.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailure::UnsupportedArchive`] when neither marker is present.
    pub fn from_file_name(file_name: &str) -> Result<Self, AssertionFailure> {
        if file_name.contains("zip") {
            Ok(Self::Zip)
        } else if file_name.contains("tar.gz") {
            Ok(Self::TarGz)
        } else {
            Err(AssertionFailure::UnsupportedArchive {
                file_name: file_name.to_string(),
            })
        }
    }

    /// The `compress_type` value rendered into the fetch manifest.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }

    /// Shell command that unpacks `archive` into `dest`.
    #[must_use]
    pub fn extract_command(self, archive: &str, dest: &str) -> String {
        match self {
            Self::Zip => format!("unzip -o {} -d {}", quote(archive), quote(dest)),
            Self::TarGz => format!("tar -xzf {} -C {}", quote(archive), quote(dest)),
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an installer archive comes from and where it is unpacked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveSpec {
    /// Base URL of the repository holding the archive.
    pub url: String,
    /// Archive file name, appended to `url`.
    pub file: String,
    /// Directory on the host the archive is downloaded to and unpacked into.
    pub dest: String,
}

impl ArchiveSpec {
    #[must_use]
    pub fn new(url: impl Into<String>, file: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file: file.into(),
            dest: dest.into(),
        }
    }

    /// Classify this archive.
    ///
    /// # Errors
    ///
    /// See [`ArchiveKind::from_file_name`].
    pub fn kind(&self) -> Result<ArchiveKind, AssertionFailure> {
        ArchiveKind::from_file_name(&self.file)
    }

    /// Full download URL: `url` joined with `file` by exactly one `/`.
    #[must_use]
    pub fn source_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), self.file)
    }

    /// Path the archive is downloaded to on the host.
    #[must_use]
    pub fn staged_path(&self) -> String {
        format!("{}/{}", self.dest.trim_end_matches('/'), self.file)
    }
}
