//! CLI end-to-end tests
//!
//! Tests for the holonet command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the holonet binary
#[allow(deprecated)]
fn holonet_cmd() -> Command {
    Command::cargo_bin("holonet").unwrap()
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    let config_file = dir.join("config.toml");
    let db_path = dir.join("test.db");
    fs::write(
        &config_file,
        format!(
            r#"
[server]
host = "127.0.0.1"
port = 8123

[database]
path = "{}"
pool_size = 2
"#,
            db_path.display()
        ),
    )
    .unwrap();
    config_file
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = holonet_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = holonet_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("holonet"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = holonet_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_start_help() {
    let mut cmd = holonet_cmd();
    cmd.args(["start", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start the GraphQL server"));
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = write_config(temp.path());

    let mut cmd = holonet_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("127.0.0.1:8123"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[server]\nport = 0\n").unwrap();

    let mut cmd = holonet_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("port"));
}

#[test]
fn test_cli_init_db_creates_file() {
    let temp = tempdir().unwrap();
    let config_file = write_config(temp.path());

    let mut cmd = holonet_cmd();
    cmd.arg("--config")
        .arg(&config_file)
        .arg("init-db")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));

    assert!(temp.path().join("test.db").exists());
}

#[test]
fn test_cli_seed_reports_counts() {
    let temp = tempdir().unwrap();
    let config_file = write_config(temp.path());

    // Seeding twice replaces rows rather than duplicating them
    for _ in 0..2 {
        let mut cmd = holonet_cmd();
        cmd.arg("--config")
            .arg(&config_file)
            .arg("seed")
            .assert()
            .success()
            .stdout(predicate::str::contains("Planets: 5"))
            .stdout(predicate::str::contains("Assignments: 2"));
    }
}
