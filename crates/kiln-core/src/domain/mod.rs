// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! This module contains pure business logic with no I/O. Filesystem,
//! archive and version-control concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: `tracing` stays in the application layer
//! - **Immutable data**: The catalog is `static`; descriptors are read-only once built
//!
pub mod catalog;
pub mod entities;
pub mod error;
pub mod renderer;
pub mod resolver;
pub mod value_objects;

mod validation;

pub use entities::{
    BuildModel, DEFAULT_GROUP, DEFAULT_VERSION, Dependency, DescriptorBuilder, DirectoryEntry,
    FileEntry, Plugin, PluginOrigin, ProjectDescriptor, RelativePath, RenderPlan,
    ResolvedArtifacts,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Language, License, LoggingFramework, Repository, Scope, TestingFramework};

pub use renderer::{render, render_plan};
pub use resolver::resolve;
pub use validation::DomainValidator;
