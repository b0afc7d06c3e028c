//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list options".

pub mod catalog_service;
pub mod export_service;
pub mod generate_service;

pub use catalog_service::{CatalogService, OPTION_KINDS, OptionInfo};
pub use export_service::ExportService;
pub use generate_service::GenerateService;
