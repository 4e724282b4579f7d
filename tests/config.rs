use std::path::PathBuf;
use tagdesk::config::Config;
use tagdesk::constants::{CHART_DEFAULT_WIDTH_PERCENT, DEFAULT_DATABASE_PATH};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.path, PathBuf::from(DEFAULT_DATABASE_PATH));
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.show_chart);
    assert_eq!(config.ui.chart_width_percent, CHART_DEFAULT_WIDTH_PERCENT);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Chart too narrow or too wide
    config.ui.chart_width_percent = 10;
    assert!(config.validate().is_err());
    config.ui.chart_width_percent = 90;
    assert!(config.validate().is_err());

    // Reset and test an empty database path
    config.ui.chart_width_percent = CHART_DEFAULT_WIDTH_PERCENT;
    config.database.path = PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[database]
path = "/var/lib/plant/tags.db"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.database.path, PathBuf::from("/var/lib/plant/tags.db"));
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert!(config.ui.show_chart);
    assert_eq!(config.ui.chart_width_percent, CHART_DEFAULT_WIDTH_PERCENT);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.path, default_config.database.path);
    assert_eq!(config.ui.chart_width_percent, default_config.ui.chart_width_percent);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tagdesk.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Tagdesk Configuration File"));
    assert!(content.contains("chart_width_percent = 40"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.database.path, PathBuf::from(DEFAULT_DATABASE_PATH));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagdesk.toml");
    std::fs::write(&path, "[ui]\nchart_width_percent = 95\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("chart_width_percent"));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}
