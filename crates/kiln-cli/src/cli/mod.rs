//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, builder::PossibleValuesParser};

use kiln_core::{
    application::OPTION_KINDS,
    domain::{
        Dependency, DomainError, Language, License, LoggingFramework, Repository, Scope,
        TestingFramework,
    },
};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Gradle project skeletons for the JVM",
    long_about = "Kiln generates ready-to-build Gradle projects for Java, Kotlin, \
                  Groovy and Scala, with testing, logging and license options.",
    after_help = "EXAMPLES:\n\
        \x20 kiln new billing --lang java --testing junit5\n\
        \x20 kiln new ../svc  --lang kotlin,java --logging logback --git-init\n\
        \x20 kiln options --format json\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new Gradle project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 kiln new billing --lang java\n\
            \x20 kiln new api     --lang kotlin --testing junit5 --logging logback --license mit\n\
            \x20 kiln new lib     --lang scala --dependency org.typelevel:cats-core_2.13:2.10.0\n\
            \x20 kiln new svc     --lang java --git-remote git@github.com:acme/svc.git --zip svc.zip"
    )]
    New(NewArgs),

    /// List the option catalog.
    #[command(
        visible_alias = "ls",
        alias = "list",
        about = "List available options",
        after_help = "EXAMPLES:\n\
            \x20 kiln options\n\
            \x20 kiln options --kind testing\n\
            \x20 kiln options --format json"
    )]
    Options(OptionsArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kiln init                      # platform config directory\n\
            \x20 kiln --config kiln.toml init   # explicit location"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kiln configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get defaults.group\n\
            \x20 kiln config list\n\
            \x20 kiln config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `kiln new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the project one level up.  The last component is the
    /// Gradle project name.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Source languages, comma separated or repeated.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        value_delimiter = ',',
        required = true,
        help = "Languages: java, kotlin, groovy, scala"
    )]
    pub languages: Vec<Language>,

    #[arg(short = 'g', long = "group", value_name = "GROUP", help = "Maven group id")]
    pub group: Option<String>,

    #[arg(long = "version", value_name = "VERSION", help = "Project version")]
    pub version: Option<String>,

    #[arg(
        long = "license",
        value_name = "LICENSE",
        help = "License: none, mit, apache-2, bsd-3-clause, unlicense"
    )]
    pub license: Option<License>,

    #[arg(
        short = 't',
        long = "testing",
        value_name = "FRAMEWORK",
        help = "Testing: none, junit4, junit5, testng, spock"
    )]
    pub testing: Option<TestingFramework>,

    #[arg(
        long = "logging",
        value_name = "FRAMEWORK",
        help = "Logging: none, slf4j, logback, log4j2"
    )]
    pub logging: Option<LoggingFramework>,

    /// Extra repositories; when absent the configured defaults apply.
    #[arg(
        short = 'r',
        long = "repo",
        value_name = "REPOSITORY",
        value_delimiter = ',',
        help = "Repositories: maven-central, google, maven-local, gradle-plugin-portal"
    )]
    pub repositories: Vec<Repository>,

    #[arg(
        short = 'd',
        long = "dependency",
        value_name = "G:A:V[:SCOPE]",
        help = "Extra dependency (scope defaults to compile)"
    )]
    pub dependencies: Vec<Dependency>,

    #[arg(
        long = "gradle-plugin",
        value_name = "G:A:V",
        value_parser = parse_gradle_plugin,
        help = "Build-script classpath artifact"
    )]
    pub gradle_plugins: Vec<Dependency>,

    #[arg(
        short = 'p',
        long = "plugin",
        value_name = "ID",
        help = "Plugin id applied with `apply plugin:`"
    )]
    pub plugins: Vec<String>,

    #[arg(long = "git-init", help = "Initialise a git repository")]
    pub git_init: bool,

    /// Setting a remote implies `--git-init`.
    #[arg(long = "git-remote", value_name = "URL", help = "Set the origin remote")]
    pub git_remote: Option<String>,

    #[arg(long = "zip", value_name = "FILE", help = "Also write a zip archive of the project")]
    pub zip: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Write into a non-empty directory, overwriting generated files.
    #[arg(long = "force", help = "Write into an existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// `group:artifact:version` on the build-script classpath.
fn parse_gradle_plugin(s: &str) -> Result<Dependency, DomainError> {
    let mut dependency: Dependency = s.parse()?;
    if s.trim().split(':').count() == 3 {
        dependency.scope = Scope::Classpath;
    }
    Ok(dependency)
}

// ── options ───────────────────────────────────────────────────────────────────

/// Arguments for `kiln options`.
#[derive(Debug, Args)]
pub struct OptionsArgs {
    /// Only show one kind of option.
    #[arg(
        short = 'k',
        long = "kind",
        value_parser = PossibleValuesParser::new(OPTION_KINDS),
        help = "Filter by option kind"
    )]
    pub kind: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `options` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `kind value` pair per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.group`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_new(args: &[&str]) -> NewArgs {
        let cli = Cli::parse_from(["kiln", "new"].iter().chain(args));
        match cli.command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn languages_accept_commas_and_repeats() {
        let args = parse_new(&["svc", "--lang", "kotlin,java", "-l", "scala"]);
        assert_eq!(
            args.languages,
            [Language::Kotlin, Language::Java, Language::Scala]
        );
    }

    #[test]
    fn language_alias_is_accepted() {
        let args = parse_new(&["svc", "-l", "kt"]);
        assert_eq!(args.languages, [Language::Kotlin]);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let result = Cli::try_parse_from(["kiln", "new", "svc", "--lang", "cobol"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn lang_is_required() {
        assert!(Cli::try_parse_from(["kiln", "new", "svc"]).is_err());
    }

    #[test]
    fn build_options_parse_into_domain_types() {
        let args = parse_new(&[
            "svc",
            "--lang",
            "java",
            "--testing",
            "junit5",
            "--logging",
            "log4j2",
            "--license",
            "apache-2",
            "--repo",
            "google,maven-local",
            "--dependency",
            "com.google.guava:guava:33.0.0-jre",
            "--dependency",
            "org.projectlombok:lombok:1.18.30:compile-only",
        ]);
        assert_eq!(args.testing, Some(TestingFramework::JUnit5));
        assert_eq!(args.logging, Some(LoggingFramework::Log4j2));
        assert_eq!(args.license, Some(License::Apache2));
        assert_eq!(args.repositories, [Repository::Google, Repository::MavenLocal]);
        assert_eq!(args.dependencies[1].scope, Scope::CompileOnly);
    }

    #[test]
    fn gradle_plugin_defaults_to_classpath_scope() {
        let args = parse_new(&[
            "svc",
            "-l",
            "java",
            "--gradle-plugin",
            "com.github.ben-manes:gradle-versions-plugin:0.51.0",
        ]);
        assert_eq!(args.gradle_plugins[0].scope, Scope::Classpath);
    }

    #[test]
    fn explicit_gradle_plugin_scope_is_kept() {
        let dep = parse_gradle_plugin("a.b:c:1.0:test").unwrap();
        assert_eq!(dep.scope, Scope::Test);
    }

    #[test]
    fn project_version_flag_is_not_the_cli_version() {
        let args = parse_new(&["svc", "-l", "java", "--version", "2.0.0"]);
        assert_eq!(args.version.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn options_kind_is_restricted() {
        assert!(Cli::try_parse_from(["kiln", "options", "--kind", "testing"]).is_ok());
        assert!(Cli::try_parse_from(["kiln", "options", "--kind", "editor"]).is_err());
    }

    #[test]
    fn list_is_an_alias_for_options() {
        let cli = Cli::parse_from(["kiln", "list", "--format", "csv"]);
        assert!(matches!(
            cli.command,
            Commands::Options(OptionsArgs {
                format: ListFormat::Csv,
                ..
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["kiln", "--quiet", "--verbose", "options"]);
        assert!(result.is_err());
    }
}
