//! Option compatibility resolution.
//!
//! Expands a descriptor's chosen options into the plugins, dependencies and
//! repositories the build needs. All option knowledge comes from
//! [`catalog`](crate::domain::catalog); this module only merges.

use crate::domain::{
    catalog::{self, DependencyDef},
    entities::{Plugin, ProjectDescriptor, ResolvedArtifacts},
    error::DomainError,
};

/// Resolve a validated descriptor into its build artifacts.
///
/// Catalog contributions are merged first (languages in declared order, then
/// testing, then logging), caller-supplied entries last. Duplicates are
/// dropped, so a catalog entry always beats a caller duplicate.
///
/// # Errors
///
/// [`DomainError::MissingCatalogEntry`] when an option value has no registry
/// entry. That is a bug in the catalog, not a user error.
pub fn resolve(descriptor: &ProjectDescriptor) -> Result<ResolvedArtifacts, DomainError> {
    let mut artifacts = ResolvedArtifacts::new();

    for &language in descriptor.languages() {
        let def = catalog::find_language(language).ok_or_else(|| missing("language", language))?;
        artifacts.push_plugin(def.plugin.to_plugin());
        push_defs(&mut artifacts, def.dependencies);
        for &repository in def.repositories {
            artifacts.push_repository(repository);
        }
    }

    let build = descriptor.build();

    let testing =
        catalog::find_testing(build.testing).ok_or_else(|| missing("testing framework", build.testing))?;
    if let Some(plugin) = testing.plugin {
        artifacts.push_plugin(plugin.to_plugin());
    }
    push_defs(&mut artifacts, testing.dependencies);

    let logging =
        catalog::find_logging(build.logging).ok_or_else(|| missing("logging framework", build.logging))?;
    push_defs(&mut artifacts, logging.dependencies);

    for &repository in &build.project_context {
        artifacts.push_repository(repository);
    }

    for dependency in build.dependencies.iter().chain(&build.gradle_plugins) {
        artifacts.push_dependency(dependency.clone());
    }

    for id in &build.plugins {
        artifacts.push_plugin(Plugin::custom(id.as_str()));
    }

    Ok(artifacts)
}

fn push_defs(artifacts: &mut ResolvedArtifacts, defs: &[DependencyDef]) {
    for def in defs {
        artifacts.push_dependency(def.to_dependency());
    }
}

fn missing(option: &'static str, value: impl ToString) -> DomainError {
    DomainError::MissingCatalogEntry {
        option,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Dependency, PluginOrigin},
        value_objects::{Language, LoggingFramework, Repository, Scope, TestingFramework},
    };

    fn ids(artifacts: &ResolvedArtifacts) -> Vec<&str> {
        artifacts.plugins().iter().map(|p| p.id.as_str()).collect()
    }

    fn artifact_names(artifacts: &ResolvedArtifacts) -> Vec<&str> {
        artifacts
            .dependencies()
            .iter()
            .map(|d| d.artifact.as_str())
            .collect()
    }

    #[test]
    fn plain_java_needs_only_the_java_plugin() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Java)
            .build()
            .unwrap();
        let artifacts = resolve(&d).unwrap();
        assert_eq!(ids(&artifacts), ["java"]);
        assert!(artifacts.dependencies().is_empty());
        assert_eq!(artifacts.repositories(), [Repository::MavenCentral]);
    }

    #[test]
    fn kotlin_with_testng() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Kotlin)
            .testing(TestingFramework::TestNg)
            .build()
            .unwrap();
        let artifacts = resolve(&d).unwrap();
        assert_eq!(ids(&artifacts), ["org.jetbrains.kotlin.jvm"]);
        assert_eq!(artifact_names(&artifacts), ["kotlin-stdlib", "testng"]);
        assert_eq!(artifacts.dependencies()[1].scope, Scope::Test);
    }

    #[test]
    fn languages_resolve_in_declared_order() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Scala)
            .language(Language::Groovy)
            .language(Language::Java)
            .build()
            .unwrap();
        assert_eq!(ids(&resolve(&d).unwrap()), ["java", "groovy", "scala"]);
    }

    #[test]
    fn spock_plugin_deduplicates_against_groovy_language() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Groovy)
            .testing(TestingFramework::Spock)
            .build()
            .unwrap();
        let artifacts = resolve(&d).unwrap();
        assert_eq!(ids(&artifacts), ["groovy"]);
    }

    #[test]
    fn logging_contributes_every_artifact() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Java)
            .logging(LoggingFramework::Log4j2)
            .build()
            .unwrap();
        assert_eq!(
            artifact_names(&resolve(&d).unwrap()),
            ["log4j-api", "log4j-core"]
        );
    }

    #[test]
    fn catalog_entries_beat_caller_duplicates() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Kotlin)
            .dependency(Dependency::new(
                "org.jetbrains.kotlin",
                "kotlin-stdlib",
                "1.8.0",
                Scope::Compile,
            ))
            .plugin("org.jetbrains.kotlin.jvm")
            .build()
            .unwrap();
        let artifacts = resolve(&d).unwrap();
        assert_eq!(artifacts.dependencies().len(), 1);
        assert_eq!(artifacts.dependencies()[0].version, "1.9.24");
        assert_eq!(artifacts.plugins()[0].origin, PluginOrigin::Catalog);
        assert_eq!(artifacts.custom_plugins().count(), 0);
    }

    #[test]
    fn caller_entries_keep_their_order() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Java)
            .repository(Repository::Google)
            .repository(Repository::MavenCentral)
            .repository(Repository::MavenLocal)
            .dependency("com.google.guava:guava:33.2.0-jre".parse().unwrap())
            .dependency("org.assertj:assertj-core:3.25.3:test".parse().unwrap())
            .gradle_plugin(Dependency::new("com.diffplug.spotless", "spotless-plugin-gradle", "6.25.0", Scope::Classpath))
            .plugin("com.diffplug.spotless")
            .build()
            .unwrap();
        let artifacts = resolve(&d).unwrap();
        assert_eq!(
            artifacts.repositories(),
            [Repository::MavenCentral, Repository::Google, Repository::MavenLocal]
        );
        assert_eq!(
            artifact_names(&artifacts),
            ["guava", "assertj-core", "spotless-plugin-gradle"]
        );
        assert!(artifacts.has_classpath());
        assert_eq!(ids(&artifacts), ["java", "com.diffplug.spotless"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        let d = ProjectDescriptor::builder("a")
            .languages(Language::ALL)
            .testing(TestingFramework::JUnit5)
            .logging(LoggingFramework::Logback)
            .build()
            .unwrap();
        assert_eq!(resolve(&d).unwrap(), resolve(&d).unwrap());
    }

    #[test]
    fn notations_include_scope() {
        let d = ProjectDescriptor::builder("a")
            .language(Language::Java)
            .testing(TestingFramework::JUnit4)
            .build()
            .unwrap();
        let artifacts = resolve(&d).unwrap();
        let notations: Vec<_> = artifacts.dependencies().iter().map(ToString::to_string).collect();
        assert_eq!(notations, ["junit:junit:4.13.2 (test)"]);
    }
}
