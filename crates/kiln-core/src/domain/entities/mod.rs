pub mod artifacts;
pub mod common;
pub mod descriptor;
pub mod render_plan;

pub use crate::domain::DomainError;
pub use artifacts::{Plugin, PluginOrigin, ResolvedArtifacts};
pub use common::RelativePath;
pub use descriptor::{
    BuildModel, DEFAULT_GROUP, DEFAULT_VERSION, Dependency, DescriptorBuilder, ProjectDescriptor,
};
pub use render_plan::{DirectoryEntry, FileEntry, RenderPlan};
