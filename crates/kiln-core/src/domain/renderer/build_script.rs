//! `build.gradle` as an ordered list of typed sections.
//!
//! Each section knows how to print itself; [`BuildScript`] decides which
//! sections exist and in what order, then serializes them once through
//! `Display`. Nothing here concatenates ad-hoc strings.
//!
//! Section order:
//!
//! ```text
//! buildscript { ... }      only when classpath dependencies exist
//! plugins { ... }
//! group / version
//! repositories { ... }
//! dependencies { ... }     grouped by scope
//! test { ... }             only when the testing framework needs an opt-in
//! apply plugin: '...'      caller plugins from the buildscript classpath
//! ```

use std::fmt;

use crate::domain::{
    catalog,
    entities::{Dependency, Plugin, ProjectDescriptor, ResolvedArtifacts},
    error::DomainError,
    value_objects::{Repository, Scope},
};

const INDENT: &str = "    ";

/// Scopes rendered inside `dependencies {}`, in output order.
const PROJECT_SCOPES: [Scope; 5] = [
    Scope::Compile,
    Scope::CompileOnly,
    Scope::Runtime,
    Scope::Test,
    Scope::TestRuntime,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildScript {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Section {
    Buildscript {
        repositories: Vec<&'static str>,
        classpath: Vec<String>,
    },
    Plugins(Vec<PluginLine>),
    Coordinates {
        group: String,
        version: String,
    },
    Repositories(Vec<&'static str>),
    Dependencies(Vec<ScopeBlock>),
    TestBootstrap(&'static str),
    ApplyPlugins(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PluginLine {
    id: String,
    version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScopeBlock {
    configuration: &'static str,
    notations: Vec<String>,
}

impl BuildScript {
    pub fn compose(
        descriptor: &ProjectDescriptor,
        artifacts: &ResolvedArtifacts,
    ) -> Result<Self, DomainError> {
        let repositories = artifacts
            .repositories()
            .iter()
            .map(|&r| {
                catalog::find_repository(r)
                    .map(|def| def.dsl)
                    .ok_or_else(|| DomainError::MissingCatalogEntry {
                        option: "repository",
                        value: r.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut sections = Vec::new();

        if artifacts.has_classpath() {
            sections.push(Section::Buildscript {
                repositories: buildscript_repositories(&repositories)?,
                classpath: notations(artifacts.dependencies_in(Scope::Classpath)),
            });
        }

        sections.push(Section::Plugins(
            artifacts.catalog_plugins().map(PluginLine::from).collect(),
        ));

        sections.push(Section::Coordinates {
            group: descriptor.group().to_string(),
            version: descriptor.version().to_string(),
        });

        sections.push(Section::Repositories(repositories));

        let blocks: Vec<ScopeBlock> = PROJECT_SCOPES
            .iter()
            .filter_map(|&scope| {
                let notations = notations(artifacts.dependencies_in(scope));
                (!notations.is_empty()).then_some(ScopeBlock {
                    configuration: scope.configuration(),
                    notations,
                })
            })
            .collect();
        if !blocks.is_empty() {
            sections.push(Section::Dependencies(blocks));
        }

        let testing = catalog::find_testing(descriptor.build().testing).ok_or_else(|| {
            DomainError::MissingCatalogEntry {
                option: "testing framework",
                value: descriptor.build().testing.to_string(),
            }
        })?;
        if let Some(bootstrap) = testing.bootstrap {
            sections.push(Section::TestBootstrap(bootstrap));
        }

        let custom: Vec<String> = artifacts.custom_plugins().map(|p| p.id.clone()).collect();
        if !custom.is_empty() {
            sections.push(Section::ApplyPlugins(custom));
        }

        Ok(Self { sections })
    }
}

/// Project repositories plus the plugin portal, where most Gradle plugins
/// are published.
fn buildscript_repositories(project: &[&'static str]) -> Result<Vec<&'static str>, DomainError> {
    let portal = catalog::find_repository(Repository::GradlePluginPortal)
        .ok_or_else(|| DomainError::MissingCatalogEntry {
            option: "repository",
            value: Repository::GradlePluginPortal.to_string(),
        })?
        .dsl;
    let mut repositories = project.to_vec();
    if !repositories.contains(&portal) {
        repositories.push(portal);
    }
    Ok(repositories)
}

fn notations<'a>(dependencies: impl Iterator<Item = &'a Dependency>) -> Vec<String> {
    dependencies.map(Dependency::notation).collect()
}

impl From<&Plugin> for PluginLine {
    fn from(plugin: &Plugin) -> Self {
        Self {
            id: plugin.id.clone(),
            version: plugin.version.clone(),
        }
    }
}

impl fmt::Display for BuildScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buildscript {
                repositories,
                classpath,
            } => {
                writeln!(f, "buildscript {{")?;
                writeln!(f, "{INDENT}repositories {{")?;
                for dsl in repositories {
                    writeln!(f, "{INDENT}{INDENT}{dsl}")?;
                }
                writeln!(f, "{INDENT}}}")?;
                writeln!(f, "{INDENT}dependencies {{")?;
                for notation in classpath {
                    writeln!(f, "{INDENT}{INDENT}classpath '{notation}'")?;
                }
                writeln!(f, "{INDENT}}}")?;
                writeln!(f, "}}")
            }
            Self::Plugins(plugins) => {
                writeln!(f, "plugins {{")?;
                for plugin in plugins {
                    match &plugin.version {
                        Some(version) => {
                            writeln!(f, "{INDENT}id '{}' version '{version}'", plugin.id)?
                        }
                        None => writeln!(f, "{INDENT}id '{}'", plugin.id)?,
                    }
                }
                writeln!(f, "}}")
            }
            Self::Coordinates { group, version } => {
                writeln!(f, "group = '{group}'")?;
                writeln!(f, "version = '{version}'")
            }
            Self::Repositories(repositories) => {
                writeln!(f, "repositories {{")?;
                for dsl in repositories {
                    writeln!(f, "{INDENT}{dsl}")?;
                }
                writeln!(f, "}}")
            }
            Self::Dependencies(blocks) => {
                writeln!(f, "dependencies {{")?;
                for block in blocks {
                    for notation in &block.notations {
                        writeln!(f, "{INDENT}{} '{notation}'", block.configuration)?;
                    }
                }
                writeln!(f, "}}")
            }
            Self::TestBootstrap(statement) => {
                writeln!(f, "test {{")?;
                writeln!(f, "{INDENT}{statement}")?;
                writeln!(f, "}}")
            }
            Self::ApplyPlugins(ids) => {
                for id in ids {
                    writeln!(f, "apply plugin: '{id}'")?;
                }
                Ok(())
            }
        }
    }
}
