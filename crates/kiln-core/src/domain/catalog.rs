//! Option catalog: the static registry of build contributions.
//!
//! Every recognised option value (language, testing framework, logging
//! framework, license, repository) is described exactly once here as plain
//! data: the plugins it applies, the dependencies it adds (with scope), and
//! the files it templates into the project. The resolver and renderer read
//! these tables; neither contains a `match` on an option value.
//!
//! # Adding a New Option Value
//!
//! 1. Add the variant to its enum in `value_objects.rs`
//! 2. Add one `*Def` entry to the matching registry below
//! 3. Run the tests: `assert_catalog_integrity` flags a missing entry
//!
//! The registries are `static` and immutable, so concurrent lookups need no
//! synchronisation.

use crate::domain::entities::{Dependency, Plugin};
use crate::domain::value_objects::{
    Language, License, LoggingFramework, Repository, Scope, TestingFramework,
};

const KOTLIN_VERSION: &str = "1.9.24";
const GROOVY_VERSION: &str = "4.0.21";
const SCALA_VERSION: &str = "2.13.14";
const SLF4J_VERSION: &str = "2.0.13";
const LOG4J_VERSION: &str = "2.23.1";

// ── Contribution records ─────────────────────────────────────────────────────

/// A dependency contributed by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyDef {
    pub group: &'static str,
    pub artifact: &'static str,
    pub version: &'static str,
    pub scope: Scope,
}

impl DependencyDef {
    const fn new(
        group: &'static str,
        artifact: &'static str,
        version: &'static str,
        scope: Scope,
    ) -> Self {
        Self {
            group,
            artifact,
            version,
            scope,
        }
    }

    pub fn to_dependency(&self) -> Dependency {
        Dependency::new(self.group, self.artifact, self.version, self.scope)
    }
}

/// A plugin contributed by a catalog entry. Core Gradle plugins carry no
/// version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDef {
    pub id: &'static str,
    pub version: Option<&'static str>,
}

impl PluginDef {
    pub fn to_plugin(&self) -> Plugin {
        match self.version {
            Some(version) => Plugin::versioned(self.id, version),
            None => Plugin::core(self.id),
        }
    }
}

/// A file written verbatim into the project, relative to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: &'static str,
    pub content: &'static str,
}

// ── Language definitions ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    pub language: Language,

    /// Directory name under `src/main` and `src/test`.
    pub source_root: &'static str,

    pub plugin: PluginDef,

    pub dependencies: &'static [DependencyDef],

    /// Repositories the language's own artifacts are fetched from.
    pub repositories: &'static [Repository],
}

pub static LANGUAGE_REGISTRY: &[LanguageDef] = &[
    LanguageDef {
        language: Language::Java,
        source_root: "java",
        plugin: PluginDef {
            id: "java",
            version: None,
        },
        dependencies: &[],
        repositories: &[Repository::MavenCentral],
    },
    LanguageDef {
        language: Language::Kotlin,
        source_root: "kotlin",
        plugin: PluginDef {
            id: "org.jetbrains.kotlin.jvm",
            version: Some(KOTLIN_VERSION),
        },
        dependencies: &[DependencyDef::new(
            "org.jetbrains.kotlin",
            "kotlin-stdlib",
            KOTLIN_VERSION,
            Scope::Compile,
        )],
        repositories: &[Repository::MavenCentral],
    },
    LanguageDef {
        language: Language::Groovy,
        source_root: "groovy",
        plugin: PluginDef {
            id: "groovy",
            version: None,
        },
        dependencies: &[DependencyDef::new(
            "org.apache.groovy",
            "groovy",
            GROOVY_VERSION,
            Scope::Compile,
        )],
        repositories: &[Repository::MavenCentral],
    },
    LanguageDef {
        language: Language::Scala,
        source_root: "scala",
        plugin: PluginDef {
            id: "scala",
            version: None,
        },
        dependencies: &[DependencyDef::new(
            "org.scala-lang",
            "scala-library",
            SCALA_VERSION,
            Scope::Compile,
        )],
        repositories: &[Repository::MavenCentral],
    },
];

// ── Testing framework definitions ────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct TestingDef {
    pub framework: TestingFramework,

    /// Extra plugin the framework needs (Spock specs are Groovy sources).
    pub plugin: Option<PluginDef>,

    pub dependencies: &'static [DependencyDef],

    /// Statement placed inside `test {}` when the framework needs an opt-in
    /// beyond its dependency. JUnit 4 is Gradle's default runner and has none.
    pub bootstrap: Option<&'static str>,
}

pub static TESTING_REGISTRY: &[TestingDef] = &[
    TestingDef {
        framework: TestingFramework::None,
        plugin: None,
        dependencies: &[],
        bootstrap: None,
    },
    TestingDef {
        framework: TestingFramework::JUnit4,
        plugin: None,
        dependencies: &[DependencyDef::new("junit", "junit", "4.13.2", Scope::Test)],
        bootstrap: None,
    },
    TestingDef {
        framework: TestingFramework::JUnit5,
        plugin: None,
        dependencies: &[
            DependencyDef::new("org.junit.jupiter", "junit-jupiter", "5.10.2", Scope::Test),
            DependencyDef::new(
                "org.junit.platform",
                "junit-platform-launcher",
                "1.10.2",
                Scope::TestRuntime,
            ),
        ],
        bootstrap: Some("useJUnitPlatform()"),
    },
    TestingDef {
        framework: TestingFramework::TestNg,
        plugin: None,
        dependencies: &[DependencyDef::new("org.testng", "testng", "7.10.2", Scope::Test)],
        bootstrap: Some("useTestNG()"),
    },
    TestingDef {
        framework: TestingFramework::Spock,
        plugin: Some(PluginDef {
            id: "groovy",
            version: None,
        }),
        dependencies: &[DependencyDef::new(
            "org.spockframework",
            "spock-core",
            "2.3-groovy-4.0",
            Scope::Test,
        )],
        bootstrap: Some("useJUnitPlatform()"),
    },
];

// ── Logging framework definitions ────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct LoggingDef {
    pub framework: LoggingFramework,
    pub dependencies: &'static [DependencyDef],
    pub templates: &'static [FileTemplate],
}

pub static LOGGING_REGISTRY: &[LoggingDef] = &[
    LoggingDef {
        framework: LoggingFramework::None,
        dependencies: &[],
        templates: &[],
    },
    LoggingDef {
        framework: LoggingFramework::Slf4j,
        dependencies: &[
            DependencyDef::new("org.slf4j", "slf4j-api", SLF4J_VERSION, Scope::Compile),
            DependencyDef::new("org.slf4j", "slf4j-simple", SLF4J_VERSION, Scope::Compile),
        ],
        templates: &[],
    },
    LoggingDef {
        framework: LoggingFramework::Logback,
        dependencies: &[
            DependencyDef::new("org.slf4j", "slf4j-api", SLF4J_VERSION, Scope::Compile),
            DependencyDef::new("ch.qos.logback", "logback-classic", "1.5.6", Scope::Compile),
        ],
        templates: &[FileTemplate {
            path: "src/main/resources/logback.xml",
            content: include_str!("../../templates/logging/logback.xml"),
        }],
    },
    LoggingDef {
        framework: LoggingFramework::Log4j2,
        dependencies: &[
            DependencyDef::new(
                "org.apache.logging.log4j",
                "log4j-api",
                LOG4J_VERSION,
                Scope::Compile,
            ),
            DependencyDef::new(
                "org.apache.logging.log4j",
                "log4j-core",
                LOG4J_VERSION,
                Scope::Compile,
            ),
        ],
        templates: &[FileTemplate {
            path: "src/main/resources/log4j2.xml",
            content: include_str!("../../templates/logging/log4j2.xml"),
        }],
    },
];

// ── License definitions ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct LicenseDef {
    pub license: License,
    /// SPDX identifier, `None` for [`License::None`].
    pub spdx: Option<&'static str>,
    /// `LICENSE` file template, `None` when no file is written.
    pub template: Option<FileTemplate>,
}

const LICENSE_FILE: &str = "LICENSE";

pub static LICENSE_REGISTRY: &[LicenseDef] = &[
    LicenseDef {
        license: License::None,
        spdx: None,
        template: None,
    },
    LicenseDef {
        license: License::Mit,
        spdx: Some("MIT"),
        template: Some(FileTemplate {
            path: LICENSE_FILE,
            content: include_str!("../../templates/licenses/mit.txt"),
        }),
    },
    LicenseDef {
        license: License::Apache2,
        spdx: Some("Apache-2.0"),
        template: Some(FileTemplate {
            path: LICENSE_FILE,
            content: include_str!("../../templates/licenses/apache-2.0.txt"),
        }),
    },
    LicenseDef {
        license: License::Bsd3Clause,
        spdx: Some("BSD-3-Clause"),
        template: Some(FileTemplate {
            path: LICENSE_FILE,
            content: include_str!("../../templates/licenses/bsd-3-clause.txt"),
        }),
    },
    LicenseDef {
        license: License::Unlicense,
        spdx: Some("Unlicense"),
        template: Some(FileTemplate {
            path: LICENSE_FILE,
            content: include_str!("../../templates/licenses/unlicense.txt"),
        }),
    },
];

// ── Repository definitions ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct RepositoryDef {
    pub repository: Repository,
    /// Gradle DSL call placed inside `repositories {}`.
    pub dsl: &'static str,
}

pub static REPOSITORY_REGISTRY: &[RepositoryDef] = &[
    RepositoryDef {
        repository: Repository::MavenCentral,
        dsl: "mavenCentral()",
    },
    RepositoryDef {
        repository: Repository::Google,
        dsl: "google()",
    },
    RepositoryDef {
        repository: Repository::MavenLocal,
        dsl: "mavenLocal()",
    },
    RepositoryDef {
        repository: Repository::GradlePluginPortal,
        dsl: "gradlePluginPortal()",
    },
];

// ── Lookup ───────────────────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for catalog queries.
// `None` means the value is unregistered, which is a programming error and
// never a user error. The `assert_catalog_integrity` test catches it.

pub fn find_language(language: Language) -> Option<&'static LanguageDef> {
    LANGUAGE_REGISTRY
        .iter()
        .find(|def| def.language == language)
}

pub fn find_testing(framework: TestingFramework) -> Option<&'static TestingDef> {
    TESTING_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
}

pub fn find_logging(framework: LoggingFramework) -> Option<&'static LoggingDef> {
    LOGGING_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
}

pub fn find_license(license: License) -> Option<&'static LicenseDef> {
    LICENSE_REGISTRY.iter().find(|def| def.license == license)
}

pub fn find_repository(repository: Repository) -> Option<&'static RepositoryDef> {
    REPOSITORY_REGISTRY
        .iter()
        .find(|def| def.repository == repository)
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that every option value has exactly one registry entry and that
/// the entries are well formed.
///
/// Panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_catalog_integrity() {
    fn exactly_one<T: std::fmt::Debug + PartialEq>(values: &[T], registered: &[T], name: &str) {
        for value in values {
            let count = registered.iter().filter(|r| *r == value).count();
            assert_eq!(count, 1, "{name} {value:?} registered {count} times");
        }
    }

    exactly_one(
        &Language::ALL,
        &LANGUAGE_REGISTRY.iter().map(|d| d.language).collect::<Vec<_>>(),
        "language",
    );
    exactly_one(
        &TestingFramework::ALL,
        &TESTING_REGISTRY.iter().map(|d| d.framework).collect::<Vec<_>>(),
        "testing framework",
    );
    exactly_one(
        &LoggingFramework::ALL,
        &LOGGING_REGISTRY.iter().map(|d| d.framework).collect::<Vec<_>>(),
        "logging framework",
    );
    exactly_one(
        &License::ALL,
        &LICENSE_REGISTRY.iter().map(|d| d.license).collect::<Vec<_>>(),
        "license",
    );
    exactly_one(
        &Repository::ALL,
        &REPOSITORY_REGISTRY.iter().map(|d| d.repository).collect::<Vec<_>>(),
        "repository",
    );

    for def in LICENSE_REGISTRY {
        assert_eq!(
            def.spdx.is_some(),
            def.template.is_some(),
            "license {:?}: spdx id and template must be set together",
            def.license
        );
        assert_eq!(
            def.license == License::None,
            def.template.is_none(),
            "license {:?}: only NONE may omit its template",
            def.license
        );
    }

    for def in TESTING_REGISTRY {
        for dep in def.dependencies {
            assert!(
                matches!(dep.scope, Scope::Test | Scope::TestRuntime),
                "testing framework {:?} contributes non-test dependency {}",
                def.framework,
                dep.artifact
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
