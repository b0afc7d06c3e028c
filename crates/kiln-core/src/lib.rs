//! Kiln core: the descriptor model, option catalog, resolver and renderer,
//! plus the services that drive generation through ports.
//!
//! `domain` is pure: it turns a [`ProjectDescriptor`](domain::ProjectDescriptor)
//! into a [`RenderPlan`](domain::RenderPlan) without touching the disk.
//! `application` owns the side effects, reaching the filesystem, the archiver
//! and git only through the traits in [`application::ports`]. The
//! `kiln-adapters` crate supplies the production implementations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiln_core::prelude::*;
//!
//! let descriptor = ProjectDescriptor::builder("billing")
//!     .language(Language::Kotlin)
//!     .testing(TestingFramework::JUnit5)
//!     .build()?;
//!
//! let service = GenerateService::new(filesystem, archiver, source_control);
//! service.generate(&descriptor, "./billing".as_ref(), None)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need.
pub mod prelude {
    pub use crate::application::{
        ArchiveSummary, CatalogService, GenerateOutcome, GenerateService, OptionInfo,
        RenderReport, ScmOutcome,
        ports::{Archiver, Filesystem, SourceControl},
    };
    pub use crate::domain::{
        Dependency, Language, License, LoggingFramework, ProjectDescriptor, RenderPlan,
        Repository, Scope, TestingFramework,
    };
    pub use crate::error::{KilnError, KilnResult};
}
