//! Integration tests for loading configuration documents from disk and
//! binding them.

use std::{fs, path::PathBuf};

use sensitive_logging::{ConfigError, LoggerRegistry, LoggingConfig};
use serde_json::json;
use tempfile::TempDir;

const JSON_DOCUMENT: &str = r#"{
    "version": 1,
    "loggers": {
        "payments": {
            "level": "INFO",
            "sensitive_data_in_extra": ["card_number", "cvv"]
        },
        "auth": {
            "sensitive_data_in_message": true
        }
    }
}"#;

const TOML_DOCUMENT: &str = r#"
version = 1

[loggers.payments]
level = "INFO"
sensitive_data_in_extra = ["card_number", "cvv"]

[loggers.auth]
sensitive_data_in_message = true
"#;

fn write(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

fn assert_bound(config: &LoggingConfig) {
    let registry = LoggerRegistry::bind(config);

    let payments = registry.config_for("payments");
    assert_eq!(payments.sensitive_field_names(), ["card_number", "cvv"]);
    assert!(!payments.sensitive_whole_message());

    let auth = registry.config_for("auth");
    assert!(auth.sensitive_field_names().is_empty());
    assert!(auth.sensitive_whole_message());

    assert!(registry.config_for("anything_else").is_passthrough());
}

#[test]
fn test_json_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "logging.json", JSON_DOCUMENT);

    let config = LoggingConfig::from_path(&path).unwrap();

    assert_bound(&config);
    assert_eq!(config.passthrough().get("version"), Some(&json!(1)));
    assert_eq!(
        config.logger("payments").unwrap().passthrough().get("level"),
        Some(&json!("INFO"))
    );
}

#[test]
fn test_toml_file_is_loaded_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "logging.toml", TOML_DOCUMENT);

    let config = LoggingConfig::from_path(&path).unwrap();

    assert_bound(&config);
    assert_eq!(config.loggers().count(), 2);
}

#[test]
fn test_json_and_toml_documents_agree() {
    let dir = TempDir::new().unwrap();
    let from_json = LoggingConfig::from_path(write(&dir, "a.json", JSON_DOCUMENT)).unwrap();
    let from_toml = LoggingConfig::from_path(write(&dir, "b.toml", TOML_DOCUMENT)).unwrap();

    assert_eq!(from_json, from_toml);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    let err = LoggingConfig::from_path(dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_toml_content_in_json_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "logging.json", TOML_DOCUMENT);

    let err = LoggingConfig::from_path(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_invalid_logger_in_file_fails_the_whole_document() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "logging.toml",
        r#"
[loggers.ok]
sensitive_data_in_message = true

[loggers.broken]
sensitive_data_in_extra = ["email", "email"]
"#,
    );

    let err = LoggingConfig::from_path(&path).unwrap_err();

    match err {
        ConfigError::InvalidLogger { logger, .. } => assert_eq!(logger, "broken"),
        other => panic!("expected an invalid logger error, got {other:?}"),
    }
}
