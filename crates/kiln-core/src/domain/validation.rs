use std::collections::HashSet;

use crate::domain::{
    entities::{ProjectDescriptor, RenderPlan, ResolvedArtifacts},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Services call these before anything touches the filesystem.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_descriptor(descriptor: &ProjectDescriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }

    /// Resolved collections must hold each key once.
    pub fn validate_artifacts(artifacts: &ResolvedArtifacts) -> Result<(), DomainError> {
        let mut plugins = HashSet::new();
        for plugin in artifacts.plugins() {
            if !plugins.insert(plugin.id.as_str()) {
                return Err(DomainError::InvalidPluginId {
                    id: plugin.id.clone(),
                    reason: "resolved more than once".into(),
                });
            }
        }

        let mut dependencies = HashSet::new();
        for dependency in artifacts.dependencies() {
            if !dependencies.insert(dependency.key()) {
                return Err(DomainError::InvalidDependency {
                    coordinates: dependency.notation(),
                    reason: "resolved more than once".into(),
                });
            }
        }

        Ok(())
    }

    pub fn validate_plan(plan: &RenderPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
