//! Catalog Service - option listing for display.
//!
//! Flattens the static option catalog into one DTO per option value.
//! Separated from GenerateService since it needs no adapters.

use serde::Serialize;

use crate::domain::catalog::{
    DependencyDef, LANGUAGE_REGISTRY, LICENSE_REGISTRY, LOGGING_REGISTRY,
    REPOSITORY_REGISTRY, TESTING_REGISTRY,
};

/// One option value and what selecting it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionInfo {
    pub kind: &'static str,
    pub value: &'static str,
    pub plugins: Vec<String>,
    pub dependencies: Vec<String>,
    pub files: Vec<&'static str>,
    pub note: Option<String>,
}

impl OptionInfo {
    fn new(kind: &'static str, value: &'static str) -> Self {
        Self {
            kind,
            value,
            plugins: Vec::new(),
            dependencies: Vec::new(),
            files: Vec::new(),
            note: None,
        }
    }
}

pub const OPTION_KINDS: [&str; 5] = ["language", "testing", "logging", "license", "repository"];

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Every option value, grouped by kind in [`OPTION_KINDS`] order.
    pub fn list(&self) -> Vec<OptionInfo> {
        OPTION_KINDS
            .iter()
            .flat_map(|kind| self.list_kind(kind))
            .collect()
    }

    /// Option values of one kind; empty for an unknown kind.
    pub fn list_kind(&self, kind: &str) -> Vec<OptionInfo> {
        match kind {
            "language" => LANGUAGE_REGISTRY
                .iter()
                .map(|def| OptionInfo {
                    plugins: vec![def.plugin.to_plugin().to_string()],
                    dependencies: notations(def.dependencies),
                    note: Some(format!("sources in src/main/{}", def.source_root)),
                    ..OptionInfo::new("language", def.language.as_str())
                })
                .collect(),
            "testing" => TESTING_REGISTRY
                .iter()
                .map(|def| OptionInfo {
                    plugins: def.plugin.iter().map(|p| p.to_plugin().to_string()).collect(),
                    dependencies: notations(def.dependencies),
                    note: def.bootstrap.map(|b| format!("test {{ {b} }}")),
                    ..OptionInfo::new("testing", def.framework.as_str())
                })
                .collect(),
            "logging" => LOGGING_REGISTRY
                .iter()
                .map(|def| OptionInfo {
                    dependencies: notations(def.dependencies),
                    files: def.templates.iter().map(|t| t.path).collect(),
                    ..OptionInfo::new("logging", def.framework.as_str())
                })
                .collect(),
            "license" => LICENSE_REGISTRY
                .iter()
                .map(|def| OptionInfo {
                    files: def.template.iter().map(|t| t.path).collect(),
                    note: def.spdx.map(|id| format!("SPDX {id}")),
                    ..OptionInfo::new("license", def.license.as_str())
                })
                .collect(),
            "repository" => REPOSITORY_REGISTRY
                .iter()
                .map(|def| OptionInfo {
                    note: Some(def.dsl.to_string()),
                    ..OptionInfo::new("repository", def.repository.as_str())
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn notations(defs: &[DependencyDef]) -> Vec<String> {
    defs.iter().map(|d| d.to_dependency().to_string()).collect()
}
