mod common;

use common::init_tracing;
use modelmeta_registry::{RegistryConfig, RegistryError};
use pretty_assertions::assert_eq;

/// Helper: write TOML content to a temp file and load via `load_from`.
fn load_config_from_str(contents: &str) -> RegistryConfig {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(&path, contents).unwrap();
    RegistryConfig::load_from(&path)
}

#[test]
fn defaults_reject_duplicates() {
    let config = RegistryConfig::default();
    assert!(config.reject_duplicate_type_codes);
    assert!(config.eager_namespaces.is_empty());
}

#[test]
fn parses_full_file() {
    let config = RegistryConfig::from_toml_str(
        r#"
reject_duplicate_type_codes = false
eager_namespaces = ["crm", "facets"]
"#,
    )
    .unwrap();

    assert_eq!(
        config,
        RegistryConfig {
            reject_duplicate_type_codes: false,
            eager_namespaces: vec!["crm".to_string(), "facets".to_string()],
        }
    );
}

#[test]
fn missing_keys_use_defaults() {
    let config = RegistryConfig::from_toml_str(r#"eager_namespaces = ["crm"]"#).unwrap();
    assert!(config.reject_duplicate_type_codes);
    assert_eq!(config.eager_namespaces, ["crm"]);
}

#[test]
fn malformed_toml_is_config_error() {
    let err = RegistryConfig::from_toml_str("eager_namespaces = crm").unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}

#[test]
fn wrong_type_is_config_error() {
    let err = RegistryConfig::from_toml_str("reject_duplicate_type_codes = \"yes\"").unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}

#[test]
fn load_from_missing_file_uses_defaults() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig::load_from(dir.path().join("nonexistent.toml"));
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn load_from_file() {
    let config = load_config_from_str(
        r#"
reject_duplicate_type_codes = true
eager_namespaces = ["billing"]
"#,
    );
    assert_eq!(config.eager_namespaces, ["billing"]);
}

#[test]
fn load_from_malformed_file_uses_defaults() {
    let config = load_config_from_str("this is not = = toml");
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn load_from_unreadable_path_uses_defaults() {
    init_tracing();
    // A directory exists but cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig::load_from(dir.path());
    assert_eq!(config, RegistryConfig::default());
}
