//! The `ProjectDescriptor` aggregate root and its typestate builder.
//!
//! A `ProjectDescriptor` is the structured request describing the project to
//! generate. Options are already typed (`Language`, `License`, ...), so every
//! enum field is a catalog member by construction; `validate` checks the
//! remaining string invariants (name, group, version, coordinates).
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoLanguage` / `HasLanguage`)
//! to enforce at *compile time* that a language is chosen before `build`.
//! Runtime validation (`validate`) is still called at `build()` to catch
//! the string constraints that cannot be expressed in the type system.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application and CLI layers, not the domain.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Language, License, LoggingFramework, Repository, Scope, TestingFramework},
};

pub const DEFAULT_GROUP: &str = "com.example";
pub const DEFAULT_VERSION: &str = "0.1.0";

const MAX_NAME_LEN: usize = 64;
const MAX_GROUP_LEN: usize = 128;
const MAX_VERSION_LEN: usize = 32;

// ── Dependency ────────────────────────────────────────────────────────────────

/// A Maven coordinate plus the scope it is declared in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default = "default_scope")]
    pub scope: Scope,
}

fn default_scope() -> Scope {
    Scope::Compile
}

impl Dependency {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        scope: Scope,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            scope,
        }
    }

    /// Identity used for de-duplication. Version is deliberately excluded:
    /// two versions of one artifact in one scope is a conflict, and the first
    /// declaration wins.
    pub fn key(&self) -> (&str, &str, Scope) {
        (&self.group, &self.artifact, self.scope)
    }

    /// `group:artifact:version`, as written in a Gradle script.
    pub fn notation(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for (label, part) in [
            ("group", &self.group),
            ("artifact", &self.artifact),
            ("version", &self.version),
        ] {
            if part.is_empty() {
                return Err(self.invalid(format!("{label} is empty")));
            }
            if let Some(bad) = part
                .chars()
                .find(|c| c.is_whitespace() || matches!(c, ':' | '\'' | '"' | '\\' | '$'))
            {
                return Err(self.invalid(format!("{label} contains '{bad}'")));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> DomainError {
        DomainError::InvalidDependency {
            coordinates: self.notation(),
            reason,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.notation(), self.scope)
    }
}

/// Parses `group:artifact:version[:scope]`; scope defaults to compile.
impl FromStr for Dependency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let (group, artifact, version, scope) = match parts.as_slice() {
            [g, a, v] => (*g, *a, *v, Scope::Compile),
            [g, a, v, scope] => (*g, *a, *v, scope.parse()?),
            _ => {
                return Err(DomainError::InvalidDependency {
                    coordinates: s.to_string(),
                    reason: "expected group:artifact:version[:scope]".into(),
                });
            }
        };
        let dependency = Self::new(group, artifact, version, scope);
        dependency.validate()?;
        Ok(dependency)
    }
}

// ── BuildModel ────────────────────────────────────────────────────────────────

/// Build options layered on top of the language selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildModel {
    pub testing: TestingFramework,
    pub logging: LoggingFramework,
    /// Extra repositories, in caller order.
    pub project_context: Vec<Repository>,
    pub dependencies: Vec<Dependency>,
    /// Build-script classpath artifacts; every entry has [`Scope::Classpath`].
    pub gradle_plugins: Vec<Dependency>,
    /// Plugin ids applied with `apply plugin:`.
    pub plugins: Vec<String>,
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// Structured request describing a project to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    name: String,
    #[serde(default = "default_group")]
    group: String,
    #[serde(default = "default_version")]
    version: String,
    languages: BTreeSet<Language>,
    #[serde(default)]
    license: License,
    #[serde(default)]
    git_repo: Option<String>,
    #[serde(default)]
    git_init: bool,
    #[serde(default)]
    build: BuildModel,
}

fn default_group() -> String {
    DEFAULT_GROUP.into()
}

fn default_version() -> String {
    DEFAULT_VERSION.into()
}

impl ProjectDescriptor {
    /// Start building a new descriptor.
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder<NoLanguage> {
        DescriptorBuilder::new(name.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn group(&self) -> &str {
        &self.group
    }
    pub fn version(&self) -> &str {
        &self.version
    }
    /// Selected languages, iterated in declaration order.
    pub fn languages(&self) -> &BTreeSet<Language> {
        &self.languages
    }
    pub const fn license(&self) -> License {
        self.license
    }
    pub fn git_repo(&self) -> Option<&str> {
        self.git_repo.as_deref()
    }
    pub const fn git_init(&self) -> bool {
        self.git_init
    }
    pub fn build(&self) -> &BuildModel {
        &self.build
    }

    /// Whether the generated project will be placed under version control.
    pub fn wants_source_control(&self) -> bool {
        self.git_init || self.git_repo.is_some()
    }

    /// Validate this descriptor's invariants.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_group(&self.group)?;
        validate_version(&self.version)?;

        if self.languages.is_empty() {
            return Err(DomainError::NoLanguages);
        }

        for dependency in &self.build.dependencies {
            dependency.validate()?;
        }

        for plugin in &self.build.gradle_plugins {
            plugin.validate()?;
            if plugin.scope != Scope::Classpath {
                return Err(DomainError::MisscopedGradlePlugin {
                    coordinates: plugin.notation(),
                    scope: plugin.scope.to_string(),
                });
            }
        }

        for id in &self.build.plugins {
            validate_plugin_id(id)?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{} [", self.group, self.name, self.version)?;
        for (i, language) in self.languages.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{language}")?;
        }
        f.write_str("]")
    }
}

// ── Field validation ──────────────────────────────────────────────────────────

fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name is longer than 64 characters"));
    }
    if !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(invalid("name must start with a letter or digit"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(invalid("only letters, digits, '.', '-' and '_' are allowed"));
    }
    Ok(())
}

fn validate_group(group: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidGroup {
        group: group.to_string(),
        reason,
    };

    if group.is_empty() {
        return Err(invalid("group cannot be empty".into()));
    }
    if group.len() > MAX_GROUP_LEN {
        return Err(invalid("group is longer than 128 characters".into()));
    }
    for segment in group.split('.') {
        let mut chars = segment.chars();
        let valid = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };
        if !valid {
            return Err(invalid(format!(
                "segment '{segment}' is not a Java identifier"
            )));
        }
    }
    Ok(())
}

fn validate_version(version: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidVersion {
        version: version.to_string(),
        reason: reason.to_string(),
    };

    if version.is_empty() {
        return Err(invalid("version cannot be empty"));
    }
    if version.len() > MAX_VERSION_LEN {
        return Err(invalid("version is longer than 32 characters"));
    }
    if !version.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(invalid("version must start with a letter or digit"));
    }
    if !version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+'))
    {
        return Err(invalid("only letters, digits, '.', '-', '_' and '+' are allowed"));
    }
    Ok(())
}

pub(crate) fn validate_plugin_id(id: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidPluginId {
        id: id.to_string(),
        reason: reason.to_string(),
    };

    if id.is_empty() {
        return Err(invalid("plugin id cannot be empty"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(invalid("only letters, digits, '.', '-' and '_' are allowed"));
    }
    Ok(())
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: no language has been chosen yet.
pub struct NoLanguage;
/// Marker: at least one language call has been made.
pub struct HasLanguage;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ProjectDescriptor`].
///
/// Compile-time guarantee: `build` is only reachable after `language` or
/// `languages` has been called.
pub struct DescriptorBuilder<L> {
    descriptor: ProjectDescriptor,
    _marker: PhantomData<L>,
}

impl DescriptorBuilder<NoLanguage> {
    fn new(name: String) -> Self {
        Self {
            descriptor: ProjectDescriptor {
                name,
                group: default_group(),
                version: default_version(),
                languages: BTreeSet::new(),
                license: License::None,
                git_repo: None,
                git_init: false,
                build: BuildModel::default(),
            },
            _marker: PhantomData,
        }
    }
}

impl<L> DescriptorBuilder<L> {
    fn with_state<N>(self) -> DescriptorBuilder<N> {
        DescriptorBuilder {
            descriptor: self.descriptor,
            _marker: PhantomData,
        }
    }

    pub fn language(mut self, language: Language) -> DescriptorBuilder<HasLanguage> {
        self.descriptor.languages.insert(language);
        self.with_state()
    }

    /// Add several languages at once. An empty iterator is caught by
    /// `build` with [`DomainError::NoLanguages`].
    pub fn languages(
        mut self,
        languages: impl IntoIterator<Item = Language>,
    ) -> DescriptorBuilder<HasLanguage> {
        self.descriptor.languages.extend(languages);
        self.with_state()
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.descriptor.group = group.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.descriptor.version = version.into();
        self
    }

    pub fn license(mut self, license: License) -> Self {
        self.descriptor.license = license;
        self
    }

    pub fn git_repo(mut self, url: impl Into<String>) -> Self {
        self.descriptor.git_repo = Some(url.into());
        self
    }

    pub fn git_init(mut self, init: bool) -> Self {
        self.descriptor.git_init = init;
        self
    }

    pub fn testing(mut self, testing: TestingFramework) -> Self {
        self.descriptor.build.testing = testing;
        self
    }

    pub fn logging(mut self, logging: LoggingFramework) -> Self {
        self.descriptor.build.logging = logging;
        self
    }

    pub fn repository(mut self, repository: Repository) -> Self {
        self.descriptor.build.project_context.push(repository);
        self
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.descriptor.build.dependencies.push(dependency);
        self
    }

    pub fn gradle_plugin(mut self, plugin: Dependency) -> Self {
        self.descriptor.build.gradle_plugins.push(plugin);
        self
    }

    pub fn plugin(mut self, id: impl Into<String>) -> Self {
        self.descriptor.build.plugins.push(id.into());
        self
    }
}

impl DescriptorBuilder<HasLanguage> {
    pub fn build(self) -> Result<ProjectDescriptor, DomainError> {
        self.descriptor.validate()?;
        Ok(self.descriptor)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn java(name: &str) -> DescriptorBuilder<HasLanguage> {
        ProjectDescriptor::builder(name).language(Language::Java)
    }

    #[test]
    fn builder_applies_defaults() {
        let d = java("demo").build().unwrap();
        assert_eq!(d.group(), DEFAULT_GROUP);
        assert_eq!(d.version(), DEFAULT_VERSION);
        assert_eq!(d.license(), License::None);
        assert_eq!(d.build().testing, TestingFramework::None);
        assert_eq!(d.build().logging, LoggingFramework::None);
        assert!(!d.wants_source_control());
    }

    #[test]
    fn languages_iterate_in_declared_order() {
        let d = ProjectDescriptor::builder("poly")
            .language(Language::Scala)
            .language(Language::Java)
            .language(Language::Kotlin)
            .build()
            .unwrap();
        let order: Vec<_> = d.languages().iter().copied().collect();
        assert_eq!(order, [Language::Java, Language::Kotlin, Language::Scala]);
    }

    #[test]
    fn empty_language_list_is_rejected() {
        let err = ProjectDescriptor::builder("x")
            .languages(Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::NoLanguages);
    }

    #[test]
    fn name_rules() {
        for ok in ["demo", "my-app", "app_2", "a.b", "X"] {
            assert!(java(ok).build().is_ok(), "{ok} should be valid");
        }
        for bad in ["", "-lead", ".hidden", "has space", "slash/name", &"a".repeat(65)] {
            assert!(
                matches!(java(bad).build(), Err(DomainError::InvalidName { .. })),
                "{bad} should be invalid"
            );
        }
    }

    #[test]
    fn group_rules() {
        assert!(java("a").group("io.acme_corp.billing").build().is_ok());
        for bad in ["", "com..example", "com.1abc", "com.ex-ample", "com.example."] {
            assert!(
                matches!(java("a").group(bad).build(), Err(DomainError::InvalidGroup { .. })),
                "{bad} should be invalid"
            );
        }
    }

    #[test]
    fn version_rules() {
        for ok in ["1", "0.1.0", "1.0.0-SNAPSHOT", "2.0+build.7"] {
            assert!(java("a").version(ok).build().is_ok(), "{ok} should be valid");
        }
        for bad in ["", "v 1", "-1", "1.0'"] {
            assert!(
                matches!(java("a").version(bad).build(), Err(DomainError::InvalidVersion { .. })),
                "{bad} should be invalid"
            );
        }
    }

    #[test]
    fn dependency_parses_with_default_scope() {
        let dep: Dependency = "com.google.guava:guava:33.2.0-jre".parse().unwrap();
        assert_eq!(dep.scope, Scope::Compile);
        assert_eq!(dep.notation(), "com.google.guava:guava:33.2.0-jre");
    }

    #[test]
    fn dependency_parses_explicit_scope() {
        let dep: Dependency = "org.assertj:assertj-core:3.25.3:test".parse().unwrap();
        assert_eq!(dep.scope, Scope::Test);
    }

    #[test]
    fn dependency_rejects_malformed_coordinates() {
        assert!("guava".parse::<Dependency>().is_err());
        assert!("a:b".parse::<Dependency>().is_err());
        assert!("a::1".parse::<Dependency>().is_err());
        assert!("a:b:1:nonsense".parse::<Dependency>().is_err());
        assert!("a:b c:1".parse::<Dependency>().is_err());
    }

    #[test]
    fn gradle_plugins_must_be_classpath_scoped() {
        let err = java("a")
            .gradle_plugin(Dependency::new("com.diffplug", "spotless", "6.25.0", Scope::Compile))
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::MisscopedGradlePlugin { .. }));

        assert!(
            java("a")
                .gradle_plugin(Dependency::new(
                    "com.diffplug",
                    "spotless",
                    "6.25.0",
                    Scope::Classpath
                ))
                .build()
                .is_ok()
        );
    }

    #[test]
    fn plugin_ids_are_checked() {
        assert!(java("a").plugin("com.diffplug.spotless").build().is_ok());
        assert!(matches!(
            java("a").plugin("bad id").build(),
            Err(DomainError::InvalidPluginId { .. })
        ));
    }

    #[test]
    fn git_repo_implies_source_control() {
        let d = java("a").git_repo("https://example.com/repo.git").build().unwrap();
        assert!(d.wants_source_control());
    }

    #[test]
    fn display_shows_coordinates_and_languages() {
        let d = ProjectDescriptor::builder("svc")
            .language(Language::Kotlin)
            .language(Language::Java)
            .group("io.acme")
            .version("1.2.3")
            .build()
            .unwrap();
        assert_eq!(d.to_string(), "io.acme:svc:1.2.3 [java, kotlin]");
    }
}
