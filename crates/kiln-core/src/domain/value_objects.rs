//! Domain value objects: Language, License, TestingFramework,
//! LoggingFramework, Repository, Scope.
//!
//! # Design
//!
//! Pure `Copy` value types without identity.
//! They hold NO build knowledge. Every plugin, dependency and file template
//! an option contributes lives in `catalog.rs`. This file's only job is to
//! define the types, their string representations, and their `FromStr`
//! parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here (declaration order is resolution order)
//! 2. Add the `as_str` arm, the `ALL` entry and the `FromStr` arm here
//! 3. Add a registry entry in `catalog.rs`
//! 4. Nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalise user input: lowercase, `_` and spaces folded to `-`.
fn normalise(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

fn unknown(option: &'static str, value: &str) -> DomainError {
    DomainError::UnknownOption {
        option,
        value: value.to_string(),
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

/// A supported JVM language.
///
/// The derived `Ord` follows declaration order, which is the fixed order the
/// resolver and renderer walk languages in. Do not reorder variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    Java,
    Kotlin,
    Groovy,
    Scala,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::Java, Self::Kotlin, Self::Groovy, Self::Scala];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::Groovy => "groovy",
            Self::Scala => "scala",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "java" => Ok(Self::Java),
            "kotlin" | "kt" => Ok(Self::Kotlin),
            "groovy" => Ok(Self::Groovy),
            "scala" => Ok(Self::Scala),
            _ => Err(unknown("language", s)),
        }
    }
}

// ── License ──────────────────────────────────────────────────────────────────

/// License written to the project root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum License {
    #[default]
    None,
    Mit,
    #[serde(rename = "apache-2")]
    Apache2,
    #[serde(rename = "bsd-3-clause")]
    Bsd3Clause,
    Unlicense,
}

impl License {
    pub const ALL: [License; 5] = [
        Self::None,
        Self::Mit,
        Self::Apache2,
        Self::Bsd3Clause,
        Self::Unlicense,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mit => "mit",
            Self::Apache2 => "apache-2",
            Self::Bsd3Clause => "bsd-3-clause",
            Self::Unlicense => "unlicense",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "none" => Ok(Self::None),
            "mit" => Ok(Self::Mit),
            "apache-2" | "apache-2.0" | "apache2" | "apache" => Ok(Self::Apache2),
            "bsd-3-clause" | "bsd-3" | "bsd3" | "bsd" => Ok(Self::Bsd3Clause),
            "unlicense" => Ok(Self::Unlicense),
            _ => Err(unknown("license", s)),
        }
    }
}

// ── TestingFramework ─────────────────────────────────────────────────────────

/// Unit-testing framework wired into the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestingFramework {
    #[default]
    None,
    #[serde(rename = "junit4")]
    JUnit4,
    #[serde(rename = "junit5")]
    JUnit5,
    #[serde(rename = "testng")]
    TestNg,
    Spock,
}

impl TestingFramework {
    pub const ALL: [TestingFramework; 5] = [
        Self::None,
        Self::JUnit4,
        Self::JUnit5,
        Self::TestNg,
        Self::Spock,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::JUnit4 => "junit4",
            Self::JUnit5 => "junit5",
            Self::TestNg => "testng",
            Self::Spock => "spock",
        }
    }
}

impl fmt::Display for TestingFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestingFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "none" => Ok(Self::None),
            "junit4" | "junit-4" | "junit" => Ok(Self::JUnit4),
            "junit5" | "junit-5" | "jupiter" => Ok(Self::JUnit5),
            "testng" | "test-ng" => Ok(Self::TestNg),
            "spock" => Ok(Self::Spock),
            _ => Err(unknown("testing framework", s)),
        }
    }
}

// ── LoggingFramework ─────────────────────────────────────────────────────────

/// Logging stack added to the compile classpath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingFramework {
    #[default]
    None,
    Slf4j,
    Logback,
    #[serde(rename = "log4j2")]
    Log4j2,
}

impl LoggingFramework {
    pub const ALL: [LoggingFramework; 4] = [Self::None, Self::Slf4j, Self::Logback, Self::Log4j2];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Slf4j => "slf4j",
            Self::Logback => "logback",
            Self::Log4j2 => "log4j2",
        }
    }
}

impl fmt::Display for LoggingFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggingFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "none" => Ok(Self::None),
            "slf4j" => Ok(Self::Slf4j),
            "logback" => Ok(Self::Logback),
            "log4j2" | "log4j" | "log4j-2" => Ok(Self::Log4j2),
            _ => Err(unknown("logging framework", s)),
        }
    }
}

// ── Repository ───────────────────────────────────────────────────────────────

/// Artifact repository declared in the build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Repository {
    MavenCentral,
    Google,
    MavenLocal,
    GradlePluginPortal,
}

impl Repository {
    pub const ALL: [Repository; 4] = [
        Self::MavenCentral,
        Self::Google,
        Self::MavenLocal,
        Self::GradlePluginPortal,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MavenCentral => "maven-central",
            Self::Google => "google",
            Self::MavenLocal => "maven-local",
            Self::GradlePluginPortal => "gradle-plugin-portal",
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Repository {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "maven-central" | "mavencentral" | "central" => Ok(Self::MavenCentral),
            "google" => Ok(Self::Google),
            "maven-local" | "mavenlocal" | "local" => Ok(Self::MavenLocal),
            "gradle-plugin-portal" | "gradlepluginportal" | "plugin-portal" => {
                Ok(Self::GradlePluginPortal)
            }
            _ => Err(unknown("repository", s)),
        }
    }
}

// ── Scope ────────────────────────────────────────────────────────────────────

/// Dependency scope, i.e. the Gradle configuration a dependency lands in.
///
/// Declaration order is the order scopes appear inside the rendered
/// `dependencies {}` block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Compile,
    CompileOnly,
    Runtime,
    Test,
    TestRuntime,
    /// Build-script classpath; rendered inside `buildscript {}`.
    Classpath,
}

impl Scope {
    pub const ALL: [Scope; 6] = [
        Self::Compile,
        Self::CompileOnly,
        Self::Runtime,
        Self::Test,
        Self::TestRuntime,
        Self::Classpath,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::CompileOnly => "compile-only",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::TestRuntime => "test-runtime",
            Self::Classpath => "classpath",
        }
    }

    /// Gradle configuration name for this scope.
    pub const fn configuration(&self) -> &'static str {
        match self {
            Self::Compile => "implementation",
            Self::CompileOnly => "compileOnly",
            Self::Runtime => "runtimeOnly",
            Self::Test => "testImplementation",
            Self::TestRuntime => "testRuntimeOnly",
            Self::Classpath => "classpath",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "compile" | "implementation" => Ok(Self::Compile),
            "compile-only" | "compileonly" | "provided" => Ok(Self::CompileOnly),
            "runtime" | "runtime-only" | "runtimeonly" => Ok(Self::Runtime),
            "test" | "test-implementation" | "testimplementation" => Ok(Self::Test),
            "test-runtime" | "test-runtime-only" | "testruntimeonly" => Ok(Self::TestRuntime),
            "classpath" => Ok(Self::Classpath),
            _ => Err(unknown("scope", s)),
        }
    }
}
