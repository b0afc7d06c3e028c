//! Results returned by the application services.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Every path an export wrote, as absolute paths, each listed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    root: PathBuf,
    entries: Vec<ReportEntry>,
}

impl RenderReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Record a path. Returns `false` if it was already recorded.
    pub fn record(&mut self, path: impl Into<PathBuf>, kind: EntryKind) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.entries.push(ReportEntry { path, kind });
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.paths_of(EntryKind::Directory)
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.paths_of(EntryKind::File)
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }

    fn paths_of(&self, kind: EntryKind) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| e.path.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub files: usize,
    pub directories: usize,
}

/// What happened to the `origin` remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteStatus {
    NotRequested,
    Added,
    Updated,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum ScmOutcome {
    /// Version control was not requested.
    Skipped,
    Configured {
        root: PathBuf,
        /// `false` when an existing repository was reused.
        created: bool,
        remote: RemoteStatus,
    },
}

impl ScmOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Everything `generate` did, step by step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutcome {
    pub report: RenderReport,
    pub source_control: ScmOutcome,
    pub archive: Option<ArchiveSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_records_each_path_once() {
        let mut report = RenderReport::new("/out");
        assert!(report.record("/out", EntryKind::Directory));
        assert!(report.record("/out/build.gradle", EntryKind::File));
        assert!(!report.record("/out", EntryKind::Directory));
        assert_eq!(report.directory_count(), 1);
        assert_eq!(report.file_count(), 1);
    }
}
