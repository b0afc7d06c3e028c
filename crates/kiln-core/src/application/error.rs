//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while exporting, archiving or initializing version
/// control.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Archive creation failed.
    #[error("Failed to archive into {path}: {reason}")]
    ArchiveFailed { path: PathBuf, reason: String },

    /// Remote URL rejected before touching the filesystem.
    #[error("Invalid remote URL '{url}': {reason}")]
    InvalidRemoteUrl { url: String, reason: String },

    /// Repository initialization or remote configuration failed.
    #[error("Source control setup failed at {path}: {reason}")]
    SourceControlFailed { path: PathBuf, reason: String },

    /// Destination is occupied and the caller asked not to overwrite.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// In-memory store lock was poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the disk is not full".into(),
            ],
            Self::ArchiveFailed { path, .. } => vec![
                format!("Could not write archive: {}", path.display()),
                "Make sure the archive's parent directory exists and is writable".into(),
            ],
            Self::InvalidRemoteUrl { .. } => vec![
                "Use an https://, ssh://, git:// or file:// URL".into(),
                "Or the scp-like form: git@host:owner/repo.git".into(),
            ],
            Self::SourceControlFailed { path, .. } => vec![
                format!("Inspect the repository at: {}", path.display()),
                "Remove a broken .git directory and try again".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory is not empty: {}", path.display()),
                "Use --force to write into it (existing files are overwritten)".into(),
                "Choose a different project name".into(),
            ],
            Self::StoreLockError => vec![
                "An earlier operation panicked while holding the lock".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::ArchiveFailed { .. } => ErrorCategory::Io,
            Self::InvalidRemoteUrl { .. } | Self::SourceControlFailed { .. } => {
                ErrorCategory::Configuration
            }
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
