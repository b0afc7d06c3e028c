//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::path::Path;

use crate::application::outcome::{ArchiveSummary, ScmOutcome};
use crate::error::KilnResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;
}

/// Port for packaging a directory tree into a single archive.
///
/// Implemented by `kiln_adapters::archive::ZipArchiver`.
#[cfg_attr(test, mockall::automock)]
pub trait Archiver: Send + Sync {
    /// Archive every entry under `root` into `destination`.
    fn archive(&self, root: &Path, destination: &Path) -> KilnResult<ArchiveSummary>;
}

/// Port for version-control setup.
///
/// Implemented by `kiln_adapters::scm::GitInitializer`.
#[cfg_attr(test, mockall::automock)]
pub trait SourceControl: Send + Sync {
    /// Reject a remote URL the adapter cannot configure. Touches nothing.
    fn validate_remote(&self, url: &str) -> KilnResult<()>;

    /// Initialize (or reopen) a repository at `root` and point `origin` at
    /// `remote` when given. Never contacts the remote.
    fn initialize<'a>(&self, root: &Path, remote: Option<&'a str>) -> KilnResult<ScmOutcome>;
}
