//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate and resolve the descriptor
//! 2. Render the plan (pure)
//! 3. Export the plan to disk
//! 4. Initialize version control when requested
//! 5. Package the tree into an archive when requested
//!
//! Each step is also exposed on its own.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        outcome::{ArchiveSummary, GenerateOutcome, RenderReport, ScmOutcome},
        ports::{Archiver, Filesystem, SourceControl},
        services::ExportService,
    },
    domain::{DomainValidator as validator, ProjectDescriptor, RenderPlan, render_plan, resolve},
    error::KilnResult,
};

/// Main generation service.
pub struct GenerateService {
    exporter: ExportService,
    archiver: Box<dyn Archiver>,
    source_control: Box<dyn SourceControl>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kiln_adapters::{GitInitializer, LocalFilesystem, ZipArchiver};
    /// use kiln_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     Box::new(LocalFilesystem::new()),
    ///     Box::new(ZipArchiver::new()),
    ///     Box::new(GitInitializer::new()),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        archiver: Box<dyn Archiver>,
        source_control: Box<dyn SourceControl>,
    ) -> Self {
        Self {
            exporter: ExportService::new(filesystem),
            archiver,
            source_control,
        }
    }

    /// Validate, resolve and render `descriptor`. No I/O.
    #[instrument(skip_all, fields(project = %descriptor))]
    pub fn render(&self, descriptor: &ProjectDescriptor) -> KilnResult<RenderPlan> {
        validator::validate_descriptor(descriptor)?;

        let artifacts = resolve(descriptor)?;
        validator::validate_artifacts(&artifacts)?;
        debug!(
            plugins = artifacts.plugins().len(),
            dependencies = artifacts.dependencies().len(),
            repositories = artifacts.repositories().len(),
            "Resolved build artifacts"
        );

        let plan = render_plan(descriptor, &artifacts)?;
        debug!(
            directories = plan.directories().len(),
            files = plan.files().len(),
            "Rendered plan"
        );
        Ok(plan)
    }

    pub fn export(&self, plan: &RenderPlan, root: &Path) -> KilnResult<RenderReport> {
        self.exporter.export(plan, root)
    }

    #[instrument(skip_all, fields(root = %root.display(), destination = %destination.display()))]
    pub fn archive(&self, root: &Path, destination: &Path) -> KilnResult<ArchiveSummary> {
        let summary = self.archiver.archive(root, destination)?;
        info!(
            files = summary.files,
            directories = summary.directories,
            "Archive written"
        );
        Ok(summary)
    }

    /// Set up version control at `root`.
    ///
    /// A no-op unless `init` is set or a remote is given; a remote alone
    /// still initializes the repository.
    #[instrument(skip_all, fields(root = %root.display(), remote = ?remote, init))]
    pub fn init_source_control(
        &self,
        root: &Path,
        remote: Option<&str>,
        init: bool,
    ) -> KilnResult<ScmOutcome> {
        if !init && remote.is_none() {
            debug!("Version control not requested");
            return Ok(ScmOutcome::Skipped);
        }

        let outcome = self.source_control.initialize(root, remote)?;
        info!(outcome = ?outcome, "Version control configured");
        Ok(outcome)
    }

    /// Render, export, initialize version control and optionally archive.
    ///
    /// Nothing is written when the descriptor or its remote URL is invalid.
    /// The archive is built last so it captures the finished tree.
    #[instrument(skip_all, fields(project = %descriptor, root = %root.display()))]
    pub fn generate(
        &self,
        descriptor: &ProjectDescriptor,
        root: &Path,
        archive: Option<&Path>,
    ) -> KilnResult<GenerateOutcome> {
        info!("Generating project");

        let plan = self.render(descriptor)?;
        if let Some(url) = descriptor.git_repo() {
            self.source_control.validate_remote(url)?;
        }
        let report = self.export(&plan, root)?;
        let source_control =
            self.init_source_control(report.root(), descriptor.git_repo(), descriptor.git_init())?;
        let archive = archive
            .map(|destination| self.archive(report.root(), destination))
            .transpose()?;

        info!("Generation completed successfully");
        Ok(GenerateOutcome {
            report,
            source_control,
            archive,
        })
    }
}
