//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kiln_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{KilnError, KilnResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KilnError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
