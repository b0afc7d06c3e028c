//! Implementation of the `kiln new` command.
//!
//! Responsibility: translate CLI arguments and configured defaults into a
//! `ProjectDescriptor`, call the core generate service, and display results.
//! No business logic lives here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use kiln_adapters::{GitInitializer, LocalFilesystem, ZipArchiver};
use kiln_core::{
    application::{ApplicationError, GenerateOutcome, GenerateService, RemoteStatus, ScmOutcome},
    domain::{ProjectDescriptor, RenderPlan},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `kiln new` command.
///
/// Dispatch sequence:
/// 1. Split the argument into project name and destination
/// 2. Build and validate the descriptor (flags over config defaults)
/// 3. Render the plan; `--dry-run` stops here
/// 4. Refuse a non-empty destination unless `--force`
/// 5. Confirm with user unless `--yes` or `--quiet`
/// 6. Generate: export, version control, archive
/// 7. Print a summary and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (project_name, project_path) = resolve_project_path(&args.name)?;
    let descriptor = build_descriptor(&args, &project_name, &config)?;
    debug!(descriptor = %descriptor, path = %project_path.display(), "Descriptor resolved");

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ZipArchiver::new()),
        Box::new(GitInitializer::new()),
    );

    let plan = service.render(&descriptor)?;

    if args.dry_run {
        return show_dry_run(&plan, &project_path, &output);
    }

    ensure_destination_free(&project_path, args.force)?;

    if !args.yes && !global.quiet && !output.is_json() && interactive_terminal() {
        show_configuration(&descriptor, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    info!(path = %project_path.display(), "Generation started");
    let outcome = service.generate(&descriptor, &project_path, args.zip.as_deref())?;
    info!(
        files = outcome.report.file_count(),
        directories = outcome.report.directory_count(),
        "Generation completed"
    );

    if output.is_json() {
        output.json(&outcome)?;
        return Ok(());
    }
    show_outcome(&project_name, &outcome, &output)?;
    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// `foo/bar/svc` → (`svc`, `foo/bar/svc`); a plain name lands in the
/// current directory.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| CliError::InvalidInput {
            message: format!("cannot extract a project name from '{name}'"),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

// ── Descriptor construction ──────────────────────────────────────────────────

fn build_descriptor(
    args: &NewArgs,
    name: &str,
    config: &AppConfig,
) -> CliResult<ProjectDescriptor> {
    let defaults = &config.defaults;

    let repositories = if args.repositories.is_empty() {
        &defaults.repositories
    } else {
        &args.repositories
    };

    let mut builder = ProjectDescriptor::builder(name)
        .languages(args.languages.iter().copied())
        .group(args.group.as_deref().unwrap_or(&defaults.group))
        .version(args.version.as_deref().unwrap_or(&defaults.version))
        .license(args.license.unwrap_or(defaults.license))
        .testing(args.testing.unwrap_or(defaults.testing))
        .logging(args.logging.unwrap_or(defaults.logging))
        .git_init(args.git_init);

    for repository in repositories {
        builder = builder.repository(*repository);
    }
    for dependency in &args.dependencies {
        builder = builder.dependency(dependency.clone());
    }
    for plugin in &args.gradle_plugins {
        builder = builder.gradle_plugin(plugin.clone());
    }
    for id in &args.plugins {
        builder = builder.plugin(id);
    }
    if let Some(url) = &args.git_remote {
        builder = builder.git_repo(url);
    }

    Ok(builder.build()?)
}

/// Missing or empty is fine; anything else needs `--force`.
fn ensure_destination_free(path: &Path, force: bool) -> CliResult<()> {
    if force || !path.exists() {
        return Ok(());
    }
    let occupied = if path.is_dir() {
        fs::read_dir(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?
            .next()
            .is_some()
    } else {
        true
    };
    if occupied {
        return Err(CliError::Core(
            ApplicationError::ProjectExists {
                path: path.to_path_buf(),
            }
            .into(),
        ));
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_dry_run(plan: &RenderPlan, root: &Path, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(plan)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create {} entries at {}",
        plan.entry_count(),
        root.display()
    ))?;
    for dir in plan.directories() {
        out.print(&format!("  {}/", dir.path))?;
    }
    for file in plan.files() {
        out.print(&format!("  {}", file.path))?;
        out.detail(&format!("      {} bytes", file.size()))?;
    }
    Ok(())
}

fn show_configuration(
    descriptor: &ProjectDescriptor,
    path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let build = descriptor.build();
    let languages: Vec<_> = descriptor.languages().iter().map(|l| l.as_str()).collect();

    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", descriptor.name()))?;
    out.print(&format!("  Group:     {}", descriptor.group()))?;
    out.print(&format!("  Version:   {}", descriptor.version()))?;
    out.print(&format!("  Languages: {}", languages.join(", ")))?;
    out.print(&format!("  Testing:   {}", build.testing))?;
    out.print(&format!("  Logging:   {}", build.logging))?;
    out.print(&format!("  License:   {}", descriptor.license()))?;
    if let Some(url) = descriptor.git_repo() {
        out.print(&format!("  Remote:    {url}"))?;
    }
    out.print(&format!("  Location:  {}", path.display()))?;
    out.print("")?;
    Ok(())
}

fn show_outcome(name: &str, outcome: &GenerateOutcome, out: &OutputManager) -> CliResult<()> {
    let report = &outcome.report;
    out.success(&format!(
        "Project '{name}' created at {} ({} files, {} directories)",
        report.root().display(),
        report.file_count(),
        report.directory_count(),
    ))?;

    if let ScmOutcome::Configured { created, remote, .. } = &outcome.source_control {
        let repo = if *created {
            "Initialized git repository"
        } else {
            "Reused existing git repository"
        };
        let remote = match remote {
            RemoteStatus::NotRequested => "",
            RemoteStatus::Added => ", origin added",
            RemoteStatus::Updated => ", origin updated",
            RemoteStatus::Unchanged => ", origin unchanged",
        };
        out.success(&format!("{repo}{remote}"))?;
    }

    if let Some(archive) = &outcome.archive {
        out.success(&format!(
            "Archive written to {} ({} files)",
            archive.path.display(),
            archive.files
        ))?;
    }

    if !out.is_quiet() {
        out.print("")?;
        out.print("Next steps:")?;
        out.print(&format!("  cd {}", report.root().display()))?;
        out.print("  gradle build")?;
    }
    Ok(())
}

fn interactive_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Create project?")
        .default(true)
        .interact()
        .map_err(|e| CliError::Io {
            context: "reading confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::Parser;

    use kiln_core::domain::{Language, License, Repository, Scope, TestingFramework};

    use super::*;
    use crate::cli::{Cli, Commands};

    fn new_args(args: &[&str]) -> NewArgs {
        let cli = Cli::parse_from(["kiln", "new"].iter().chain(args));
        match cli.command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    // ── resolve_project_path ──────────────────────────────────────────────────

    #[test]
    fn simple_name_resolves_to_cwd() {
        let (name, dir) = resolve_project_path("my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("my-app"));
    }

    #[test]
    fn relative_path_keeps_the_leaf_as_name() {
        let (name, dir) = resolve_project_path("../my-app").unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("../my-app"));
    }

    #[test]
    fn nested_path_works_on_all_platforms() {
        let sep = std::path::MAIN_SEPARATOR;
        let path = format!("foo{sep}bar{sep}my-app");

        let (name, dir) = resolve_project_path(&path).unwrap();
        assert_eq!(name, "my-app");
        assert_eq!(dir, PathBuf::from("foo").join("bar").join("my-app"));
    }

    #[test]
    fn path_without_a_name_is_invalid() {
        assert!(matches!(
            resolve_project_path(".."),
            Err(CliError::InvalidInput { .. })
        ));
    }

    // ── build_descriptor ──────────────────────────────────────────────────────

    #[test]
    fn flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.group = "org.acme".into();
        config.defaults.license = License::Mit;
        config.defaults.testing = TestingFramework::JUnit4;

        let args = new_args(&["svc", "-l", "java", "--testing", "junit5"]);
        let d = build_descriptor(&args, "svc", &config).unwrap();

        assert_eq!(d.group(), "org.acme");
        assert_eq!(d.license(), License::Mit);
        assert_eq!(d.build().testing, TestingFramework::JUnit5);
    }

    #[test]
    fn repositories_fall_back_to_config_only_when_absent() {
        let mut config = AppConfig::default();
        config.defaults.repositories = vec![Repository::Google];

        let args = new_args(&["svc", "-l", "java"]);
        let d = build_descriptor(&args, "svc", &config).unwrap();
        assert_eq!(d.build().project_context, [Repository::Google]);

        let args = new_args(&["svc", "-l", "java", "--repo", "maven-local"]);
        let d = build_descriptor(&args, "svc", &config).unwrap();
        assert_eq!(d.build().project_context, [Repository::MavenLocal]);
    }

    #[test]
    fn build_extras_reach_the_descriptor() {
        let args = new_args(&[
            "svc",
            "-l",
            "kotlin,java",
            "-d",
            "com.google.guava:guava:33.0.0-jre",
            "--gradle-plugin",
            "com.github.ben-manes:gradle-versions-plugin:0.51.0",
            "-p",
            "com.github.ben-manes.versions",
            "--git-remote",
            "https://example.com/svc.git",
        ]);
        let d = build_descriptor(&args, "svc", &AppConfig::default()).unwrap();

        assert_eq!(
            d.languages().iter().copied().collect::<Vec<_>>(),
            [Language::Java, Language::Kotlin]
        );
        assert_eq!(d.build().dependencies.len(), 1);
        assert_eq!(d.build().gradle_plugins[0].scope, Scope::Classpath);
        assert_eq!(d.build().plugins, ["com.github.ben-manes.versions"]);
        assert_eq!(d.git_repo(), Some("https://example.com/svc.git"));
        assert!(d.wants_source_control());
    }

    #[test]
    fn invalid_group_is_a_user_error() {
        let args = new_args(&["svc", "-l", "java", "--group", "com..acme"]);
        let err = build_descriptor(&args, "svc", &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    // ── ensure_destination_free ──────────────────────────────────────────────

    #[test]
    fn missing_and_empty_destinations_are_free() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_destination_free(&dir.path().join("absent"), false).is_ok());
        assert!(ensure_destination_free(dir.path(), false).is_ok());
    }

    #[test]
    fn occupied_destination_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "hi").unwrap();

        let err = ensure_destination_free(dir.path(), false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains(&dir.path().display().to_string()));
        assert!(ensure_destination_free(dir.path(), true).is_ok());
    }

    #[test]
    fn existing_file_is_occupied() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("svc");
        fs::write(&file, "").unwrap();
        assert!(ensure_destination_free(&file, false).is_err());
    }
}
