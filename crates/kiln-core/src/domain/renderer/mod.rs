//! Pure transform from a descriptor and its resolved artifacts into a
//! [`RenderPlan`]. Touches no filesystem.

mod build_script;

pub use build_script::BuildScript;

use crate::domain::{
    catalog,
    entities::{ProjectDescriptor, RelativePath, RenderPlan, ResolvedArtifacts},
    error::DomainError,
    resolver,
};

pub const BUILD_FILE: &str = "build.gradle";
pub const SETTINGS_FILE: &str = "settings.gradle";
pub const PROPERTIES_FILE: &str = "gradle.properties";
pub const GITIGNORE_FILE: &str = ".gitignore";
const RESOURCES_DIR: &str = "src/main/resources";

const GITIGNORE: &str = "\
.gradle/
build/
out/
!gradle/wrapper/gradle-wrapper.jar

.idea/
*.iml
*.ipr
*.iws
.vscode/
.classpath
.project
.settings/
bin/

.DS_Store
";

/// Resolve and render in one step.
pub fn render(descriptor: &ProjectDescriptor) -> Result<RenderPlan, DomainError> {
    let artifacts = resolver::resolve(descriptor)?;
    render_plan(descriptor, &artifacts)
}

/// Build the render plan for `descriptor`.
///
/// The same inputs always produce the same plan, entry for entry and byte
/// for byte. The plan is validated before it is returned.
pub fn render_plan(
    descriptor: &ProjectDescriptor,
    artifacts: &ResolvedArtifacts,
) -> Result<RenderPlan, DomainError> {
    let mut plan = RenderPlan::new();

    for &language in descriptor.languages() {
        let def = catalog::find_language(language).ok_or_else(|| {
            DomainError::MissingCatalogEntry {
                option: "language",
                value: language.to_string(),
            }
        })?;
        let main = RelativePath::try_new("src/main")?.join(def.source_root)?;
        let test = RelativePath::try_new("src/test")?.join(def.source_root)?;
        plan.add_directory(main);
        plan.add_directory(test);
    }
    plan.add_directory(RelativePath::try_new(RESOURCES_DIR)?);

    let script = BuildScript::compose(descriptor, artifacts)?;
    plan.add_file(RelativePath::try_new(BUILD_FILE)?, script.to_string());

    plan.add_file(
        RelativePath::try_new(SETTINGS_FILE)?,
        format!("rootProject.name = '{}'\n", descriptor.name()),
    );
    plan.add_file(
        RelativePath::try_new(PROPERTIES_FILE)?,
        format!(
            "group={}\nversion={}\norg.gradle.caching=true\n",
            descriptor.group(),
            descriptor.version()
        ),
    );

    let license = catalog::find_license(descriptor.license()).ok_or_else(|| {
        DomainError::MissingCatalogEntry {
            option: "license",
            value: descriptor.license().to_string(),
        }
    })?;
    if let Some(template) = license.template {
        plan.add_file(RelativePath::try_new(template.path)?, template.content);
    }

    let logging = catalog::find_logging(descriptor.build().logging).ok_or_else(|| {
        DomainError::MissingCatalogEntry {
            option: "logging framework",
            value: descriptor.build().logging.to_string(),
        }
    })?;
    for template in logging.templates {
        plan.add_file(RelativePath::try_new(template.path)?, template.content);
    }

    if descriptor.wants_source_control() {
        plan.add_file(RelativePath::try_new(GITIGNORE_FILE)?, GITIGNORE);
    }

    plan.validate()?;
    Ok(plan)
}
