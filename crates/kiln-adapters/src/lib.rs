//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod filesystem;
pub mod scm;

// Re-export commonly used adapters
pub use archive::ZipArchiver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use scm::GitInitializer;
