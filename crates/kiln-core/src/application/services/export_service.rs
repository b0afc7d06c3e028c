//! Export Service - materializes a render plan on disk.
//!
//! Directories first (the root, every plan directory, every file parent),
//! then files. Existing files are overwritten, so exporting the same plan
//! twice yields the same tree and the same report. There is no rollback: a
//! failure leaves whatever was already written.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        outcome::{EntryKind, RenderReport},
        ports::Filesystem,
    },
    domain::{DomainValidator as validator, RelativePath, RenderPlan},
    error::KilnResult,
};

pub struct ExportService {
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `plan` under `root` and report every path written.
    #[instrument(
        skip_all,
        fields(
            root = %root.display(),
            directories = plan.directories().len(),
            files = plan.files().len()
        )
    )]
    pub fn export(&self, plan: &RenderPlan, root: &Path) -> KilnResult<RenderReport> {
        validator::validate_plan(plan)?;

        let root = absolute(root)?;
        let mut report = RenderReport::new(&root);

        self.filesystem.create_dir_all(&root)?;
        report.record(&root, EntryKind::Directory);

        for directory in plan.directories() {
            self.create_directory(&root, &directory.path, &mut report)?;
        }

        for file in plan.files() {
            for parent in file.path.ancestors() {
                self.create_directory(&root, &parent, &mut report)?;
            }
        }

        for file in plan.files() {
            let path = root.join(&file.path);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "Wrote file");
            report.record(path, EntryKind::File);
        }

        info!(
            directories = report.directory_count(),
            files = report.file_count(),
            "Export complete"
        );
        Ok(report)
    }

    /// Create `relative` under `root`, recording it and each missing
    /// ancestor, outermost first.
    fn create_directory(
        &self,
        root: &Path,
        relative: &RelativePath,
        report: &mut RenderReport,
    ) -> KilnResult<()> {
        let path = root.join(relative);
        if report.contains(&path) {
            return Ok(());
        }

        self.filesystem.create_dir_all(&path)?;
        for ancestor in relative.ancestors() {
            report.record(root.join(ancestor), EntryKind::Directory);
        }
        report.record(path, EntryKind::Directory);
        Ok(())
    }
}

fn absolute(path: &Path) -> KilnResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}
