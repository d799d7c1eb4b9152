//! Tests for settings resolution

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::config::{ConfigError, DEFAULT_BASE_URL, Settings};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn env_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_apply_when_only_credentials_set() {
    let settings = Settings::from_lookup(lookup(&[
        ("TRELLO_API_KEY", "key"),
        ("TRELLO_TOKEN", "token"),
    ]))
    .unwrap();

    assert_eq!(settings.api_key, "key");
    assert_eq!(settings.token, "token");
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.timeout, Duration::from_secs(30));
}

#[test]
fn test_missing_or_blank_credentials() {
    let err = Settings::from_lookup(lookup(&[("TRELLO_TOKEN", "token")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "TRELLO_API_KEY" }));

    let err = Settings::from_lookup(lookup(&[
        ("TRELLO_API_KEY", "key"),
        ("TRELLO_TOKEN", "   "),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "TRELLO_TOKEN" }));
}

#[test]
fn test_base_url_override_is_trimmed() {
    let settings = Settings::from_lookup(lookup(&[
        ("TRELLO_API_KEY", "key"),
        ("TRELLO_TOKEN", "token"),
        ("TRELLO_BASE_URL", "http://localhost:9000/1/"),
    ]))
    .unwrap();

    assert_eq!(settings.base_url, "http://localhost:9000/1");
}

#[test]
fn test_base_url_must_be_http() {
    let err = Settings::from_lookup(lookup(&[
        ("TRELLO_API_KEY", "key"),
        ("TRELLO_TOKEN", "token"),
        ("TRELLO_BASE_URL", "api.trello.com/1"),
    ]))
    .unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { var: "TRELLO_BASE_URL", .. }));
}

#[test]
fn test_timeout_parsing() {
    let base = [("TRELLO_API_KEY", "key"), ("TRELLO_TOKEN", "token")];

    let settings =
        Settings::from_lookup(lookup(&[base[0], base[1], ("TRELLO_TIMEOUT_SECS", "5")])).unwrap();
    assert_eq!(settings.timeout, Duration::from_secs(5));

    for bad in ["abc", "-1", "0", "1.5"] {
        let err = Settings::from_lookup(lookup(&[base[0], base[1], ("TRELLO_TIMEOUT_SECS", bad)]))
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { var: "TRELLO_TIMEOUT_SECS", .. }),
            "{} should be rejected",
            bad
        );
    }
}

#[test]
fn test_env_file_supplies_missing_values() {
    let file = env_file("TRELLO_API_KEY=file-key\nTRELLO_TOKEN=file-token\nTRELLO_TIMEOUT_SECS=7\n");

    let settings = Settings::load_with(Some(file.path()), |_| None).unwrap();

    assert_eq!(settings.api_key, "file-key");
    assert_eq!(settings.token, "file-token");
    assert_eq!(settings.timeout, Duration::from_secs(7));
}

#[test]
fn test_process_environment_wins_over_env_file() {
    let file = env_file("TRELLO_API_KEY=file-key\nTRELLO_TOKEN=file-token\n");

    let settings =
        Settings::load_with(Some(file.path()), lookup(&[("TRELLO_TOKEN", "process-token")]))
            .unwrap();

    assert_eq!(settings.api_key, "file-key");
    assert_eq!(settings.token, "process-token");
}

#[test]
fn test_unreadable_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.env");

    let err = Settings::load_with(Some(missing.as_path()), |_| None).unwrap_err();

    match err {
        ConfigError::EnvFile { path, .. } => assert_eq!(path, missing),
        other => panic!("expected EnvFile error, got {:?}", other),
    }
}

#[test]
fn test_debug_redacts_credentials() {
    let settings = Settings::new("secret-key", "secret-token");
    let debug = format!("{:?}", settings);

    assert!(!debug.contains("secret-key"));
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains(DEFAULT_BASE_URL));
}
