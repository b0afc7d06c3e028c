//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kiln_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KilnResult,
};

/// In-memory filesystem. Clones share the same tree.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Whether a file or directory was recorded at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted by path.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "A file already exists at this path".into(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/demo/src")).unwrap();
        assert!(fs.is_dir(Path::new("/out")));
        assert!(fs.is_dir(Path::new("/out/demo")));
        assert!(fs.is_dir(Path::new("/out/demo/src")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/a.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/a.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/out/a.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn file_and_directory_cannot_share_a_path() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/dir")).unwrap();
        assert!(fs.write_file(Path::new("/out/dir"), "x").is_err());

        fs.write_file(Path::new("/out/file"), "x").unwrap();
        assert!(fs.create_dir_all(Path::new("/out/file")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/x")).unwrap();
        fs.write_file(Path::new("/x/y"), "z").unwrap();
        assert_eq!(other.list_files(), [PathBuf::from("/x/y")]);
    }

    #[test]
    fn export_into_memory_is_complete_and_repeatable() {
        use kiln_core::{
            application::ExportService,
            domain::{Language, ProjectDescriptor, TestingFramework, render},
        };

        let descriptor = ProjectDescriptor::builder("ledger")
            .language(Language::Java)
            .testing(TestingFramework::JUnit5)
            .build()
            .unwrap();
        let plan = render(&descriptor).unwrap();

        let fs = MemoryFilesystem::new();
        let exporter = ExportService::new(Box::new(fs.clone()));
        let first = exporter.export(&plan, Path::new("/out/ledger")).unwrap();
        let second = exporter.export(&plan, Path::new("/out/ledger")).unwrap();

        assert_eq!(first, second);
        for dir in first.directories() {
            assert!(fs.is_dir(dir), "{}", dir.display());
        }
        for file in first.files() {
            assert!(fs.read_file(file).is_some(), "{}", file.display());
        }
        assert_eq!(
            fs.read_file(Path::new("/out/ledger/settings.gradle")).as_deref(),
            Some("rootProject.name = 'ledger'\n")
        );
    }
}
