//! Resolved build artifacts: the deduplicated output of the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::descriptor::Dependency,
    value_objects::{Repository, Scope},
};

/// Where a plugin came from, which decides how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginOrigin {
    /// Contributed by the option catalog; rendered inside `plugins {}`.
    Catalog,
    /// Supplied by the caller; rendered as `apply plugin:` after the
    /// build-script classpath has made it available.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plugin {
    pub id: String,
    pub version: Option<String>,
    pub origin: PluginOrigin,
}

impl Plugin {
    /// A core Gradle plugin (`java`, `groovy`, ...), applied without a version.
    pub fn core(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
            origin: PluginOrigin::Catalog,
        }
    }

    /// A community plugin resolved from the plugin portal.
    pub fn versioned(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: Some(version.into()),
            origin: PluginOrigin::Catalog,
        }
    }

    pub fn custom(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
            origin: PluginOrigin::Custom,
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.id, version),
            None => f.write_str(&self.id),
        }
    }
}

/// Plugins, dependencies and repositories required by a descriptor.
///
/// Every collection keeps insertion order and rejects duplicates on push,
/// so the first contribution of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifacts {
    plugins: Vec<Plugin>,
    dependencies: Vec<Dependency>,
    repositories: Vec<Repository>,
}

impl ResolvedArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a plugin with the same id is already present.
    pub fn push_plugin(&mut self, plugin: Plugin) -> bool {
        if self.plugins.iter().any(|p| p.id == plugin.id) {
            return false;
        }
        self.plugins.push(plugin);
        true
    }

    /// Returns `false` when the (group, artifact, scope) key is already present.
    pub fn push_dependency(&mut self, dependency: Dependency) -> bool {
        if self.dependencies.iter().any(|d| d.key() == dependency.key()) {
            return false;
        }
        self.dependencies.push(dependency);
        true
    }

    pub fn push_repository(&mut self, repository: Repository) -> bool {
        if self.repositories.contains(&repository) {
            return false;
        }
        self.repositories.push(repository);
        true
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn catalog_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins
            .iter()
            .filter(|p| p.origin == PluginOrigin::Catalog)
    }

    pub fn custom_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins
            .iter()
            .filter(|p| p.origin == PluginOrigin::Custom)
    }

    /// Dependencies in `scope`, in resolution order.
    pub fn dependencies_in(&self, scope: Scope) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(move |d| d.scope == scope)
    }

    pub fn has_classpath(&self) -> bool {
        self.dependencies.iter().any(|d| d.scope == Scope::Classpath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_plugin_wins() {
        let mut artifacts = ResolvedArtifacts::new();
        assert!(artifacts.push_plugin(Plugin::core("groovy")));
        assert!(!artifacts.push_plugin(Plugin::custom("groovy")));
        assert_eq!(artifacts.plugins().len(), 1);
        assert_eq!(artifacts.plugins()[0].origin, PluginOrigin::Catalog);
    }

    #[test]
    fn dependency_key_ignores_version() {
        let mut artifacts = ResolvedArtifacts::new();
        artifacts.push_dependency(Dependency::new("org.slf4j", "slf4j-api", "2.0.13", Scope::Compile));
        assert!(!artifacts.push_dependency(Dependency::new(
            "org.slf4j",
            "slf4j-api",
            "1.7.36",
            Scope::Compile
        )));
        assert_eq!(artifacts.dependencies()[0].version, "2.0.13");
    }

    #[test]
    fn same_artifact_in_another_scope_is_kept() {
        let mut artifacts = ResolvedArtifacts::new();
        artifacts.push_dependency(Dependency::new("g", "a", "1", Scope::Compile));
        assert!(artifacts.push_dependency(Dependency::new("g", "a", "1", Scope::Test)));
        assert_eq!(artifacts.dependencies_in(Scope::Test).count(), 1);
    }

    #[test]
    fn repositories_keep_insertion_order() {
        let mut artifacts = ResolvedArtifacts::new();
        artifacts.push_repository(Repository::Google);
        artifacts.push_repository(Repository::MavenCentral);
        artifacts.push_repository(Repository::Google);
        assert_eq!(
            artifacts.repositories(),
            [Repository::Google, Repository::MavenCentral]
        );
    }

    #[test]
    fn plugin_display_includes_version() {
        assert_eq!(Plugin::versioned("org.jetbrains.kotlin.jvm", "1.9.24").to_string(), "org.jetbrains.kotlin.jvm@1.9.24");
        assert_eq!(Plugin::core("java").to_string(), "java");
    }
}
