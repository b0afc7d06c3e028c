//! Tests for error handling, exit codes and suggestions.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn kiln(temp: &TempDir) -> assert_cmd::Command {
    let config = temp.path().join("kiln-test.toml");
    fs::write(&config, "").unwrap();
    let mut cmd = cargo_bin_cmd!("kiln");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config);
    cmd
}

#[test]
fn test_unknown_language_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args(["new", "svc", "--lang", "cobol"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown language"));
}

#[test]
fn test_missing_language_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    kiln(&temp).args(["new", "svc"]).assert().code(2);
}

#[test]
fn test_invalid_group_has_suggestions() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args(["new", "svc", "--lang", "java", "--group", "com..acme", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid group"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("svc").exists());
}

#[test]
fn test_invalid_project_name() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args(["new", "bad name", "--lang", "java", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_malformed_dependency_is_rejected() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args(["new", "svc", "--lang", "java", "--dependency", "guava"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("group:artifact:version"));
}

#[test]
fn test_invalid_remote_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args([
            "new",
            "svc",
            "--lang",
            "java",
            "--git-remote",
            "ftp://example.com/repo.git",
            "--yes",
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ftp://example.com/repo.git"));

    assert!(!temp.path().join("svc").exists());
}

#[test]
fn test_broken_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    fs::write(&config, "[defaults]\nlicense = \"gpl\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("kiln");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("options")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args(["config", "get", "defaults.editor"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.group"));
}

#[test]
fn test_verbose_error_shows_cause() {
    let temp = TempDir::new().unwrap();
    kiln(&temp)
        .args(["-v", "new", "svc", "--lang", "java", "--version", "!", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Caused by"))
        .stderr(predicate::str::contains("--verbose").not());
}
