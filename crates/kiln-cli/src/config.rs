//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KILN_DEFAULTS__GROUP=org.acme`
//! 3. Config file: `--config FILE` or the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use kiln_core::domain::{
    DEFAULT_GROUP, DEFAULT_VERSION, License, LoggingFramework, Repository, TestingFramework,
};

const ENV_PREFIX: &str = "KILN";
const LOCAL_CONFIG: &str = ".kiln.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Values applied to `kiln new` when the matching flag is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub group: String,
    pub version: String,
    pub license: License,
    pub testing: TestingFramework,
    pub logging: LoggingFramework,
    pub repositories: Vec<Repository>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP.into(),
            version: DEFAULT_VERSION.into(),
            license: License::None,
            testing: TestingFramework::None,
            logging: LoggingFramework::None,
            repositories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the platform default is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("defaults.repositories")
            .try_parsing(true);

        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The file `load` reads from for the given `--config` value.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file.map_or_else(Self::config_path, Path::to_path_buf)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(content: &str) -> anyhow::Result<AppConfig> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kiln.toml");
        std::fs::write(&path, content).unwrap();
        AppConfig::load(Some(&path))
    }

    #[test]
    fn defaults_match_the_descriptor_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.group, "com.example");
        assert_eq!(cfg.defaults.version, "0.1.0");
        assert_eq!(cfg.defaults.license, License::None);
        assert!(cfg.defaults.repositories.is_empty());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(load_from("").unwrap(), AppConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let cfg = load_from(
            r#"
[defaults]
group = "org.acme"
license = "apache-2"
testing = "junit5"
repositories = ["google", "maven-central"]

[output]
no_color = true
"#,
        )
        .unwrap();

        assert_eq!(cfg.defaults.group, "org.acme");
        assert_eq!(cfg.defaults.version, "0.1.0");
        assert_eq!(cfg.defaults.license, License::Apache2);
        assert_eq!(cfg.defaults.testing, TestingFramework::JUnit5);
        assert_eq!(
            cfg.defaults.repositories,
            [Repository::Google, Repository::MavenCentral]
        );
        assert!(cfg.output.no_color);
    }

    #[test]
    fn unknown_option_value_is_an_error() {
        assert!(load_from("[defaults]\nlicense = \"gpl\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/kiln.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kiln.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn active_path_prefers_the_flag() {
        let explicit = Path::new("custom.toml");
        assert_eq!(AppConfig::active_path(Some(explicit)), explicit);
        assert_eq!(AppConfig::active_path(None), AppConfig::config_path());
    }
}
