//! Configuration loading tests.

use holonet::config::{load_config, load_config_or_default, parse_config, Config};
use std::fs;
use tempfile::tempdir;

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert!(config.server.graphiql);
    assert_eq!(config.database.path.to_str(), Some("holonet.db"));
    assert_eq!(config.database.pool_size, 4);
}

#[test]
fn empty_document_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.pool_size, 4);
}

#[test]
fn partial_sections_are_merged_with_defaults() {
    let config = parse_config(
        r#"
[server]
port = 9090

[database]
path = "/var/lib/holonet/data.db"
"#,
    )
    .unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(
        config.database.path.to_str(),
        Some("/var/lib/holonet/data.db")
    );
    assert_eq!(config.database.pool_size, 4);
}

#[test]
fn zero_port_is_rejected() {
    let err = parse_config("[server]\nport = 0\n").unwrap_err();
    assert!(err.to_string().contains("port"));
}

#[test]
fn zero_pool_size_is_rejected() {
    let err = parse_config("[database]\npool_size = 0\n").unwrap_err();
    assert!(err.to_string().contains("pool_size"));
}

#[test]
fn malformed_toml_is_rejected() {
    assert!(parse_config("[server\nport = ").is_err());
}

#[test]
fn load_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("holonet.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
graphiql = false
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert!(!config.server.graphiql);

    let config = load_config_or_default(Some(&path)).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.toml");
    let err = load_config_or_default(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
