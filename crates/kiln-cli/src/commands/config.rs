//! `kiln config`: inspect configuration values.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `kiln config get`.
const KEYS: [&str; 8] = [
    "defaults.group",
    "defaults.version",
    "defaults.license",
    "defaults.testing",
    "defaults.logging",
    "defaults.repositories",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.raw(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::Config {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.raw(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let defaults = &config.defaults;
    let value = match key {
        "defaults.group" => defaults.group.clone(),
        "defaults.version" => defaults.version.clone(),
        "defaults.license" => defaults.license.to_string(),
        "defaults.testing" => defaults.testing.to_string(),
        "defaults.logging" => defaults.logging.to_string(),
        "defaults.repositories" => defaults
            .repositories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        _ => {
            return Err(CliError::Config {
                message: format!("Unknown config key '{key}', expected one of: {}", KEYS.join(", ")),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{License, Repository};

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn values_use_the_option_names() {
        let mut cfg = AppConfig::default();
        cfg.defaults.license = License::Bsd3Clause;
        cfg.defaults.repositories = vec![Repository::MavenCentral, Repository::Google];

        assert_eq!(get_config_value(&cfg, "defaults.license").unwrap(), "bsd-3-clause");
        assert_eq!(
            get_config_value(&cfg, "defaults.repositories").unwrap(),
            "maven-central,google"
        );
        assert_eq!(get_config_value(&cfg, "defaults.group").unwrap(), "com.example");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("does.not.exist"));
    }
}
