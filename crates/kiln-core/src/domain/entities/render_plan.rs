use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// In-memory description of a project tree, ready for export.
///
/// Produced by the renderer, consumed by the exporter. Holds no logic beyond
/// bookkeeping and validation; entries keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    directories: Vec<DirectoryEntry>,
    files: Vec<FileEntry>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory. Repeated directories are ignored, since several
    /// contributions legitimately share a parent.
    pub fn add_directory(&mut self, path: RelativePath) {
        if self.directories.iter().any(|d| d.path == path) {
            return;
        }
        self.directories.push(DirectoryEntry { path });
    }

    pub fn add_file(&mut self, path: RelativePath, content: impl Into<String>) {
        self.files.push(FileEntry {
            path,
            content: content.into(),
        });
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: RelativePath, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// No two entries may share a path, and a file may not sit where a
    /// directory is declared.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        for path in self
            .directories
            .iter()
            .map(|d| &d.path)
            .chain(self.files.iter().map(|f| &f.path))
        {
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn directories(&self) -> &[DirectoryEntry] {
        &self.directories
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Look up a file entry by its relative path.
    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }

    pub fn has_directory(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d.path.as_str() == path)
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub path: RelativePath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: RelativePath,
    pub content: String,
}

impl FileEntry {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
