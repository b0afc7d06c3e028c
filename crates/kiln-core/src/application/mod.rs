//! Application layer for Kiln.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Outcomes**: Reports returned to callers
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod services;

pub use services::{CatalogService, ExportService, GenerateService, OPTION_KINDS, OptionInfo};

pub use ports::{Archiver, Filesystem, SourceControl};

pub use error::ApplicationError;
pub use outcome::{
    ArchiveSummary, EntryKind, GenerateOutcome, RemoteStatus, RenderReport, ReportEntry,
    ScmOutcome,
};
