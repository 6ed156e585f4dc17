//! 配置加载集成测试

use std::fs;

use recmark::config::AppConfig;
use recmark::errors::RecmarkError;
use tempfile::TempDir;

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[input]
delimiter = "|"

[export]
default_extension = "tsv"
file_prefix = "picked"

[table]
min_column_width = 4
max_column_width = 20
"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.input.delimiter, "|");
    assert_eq!(config.export.default_extension, "tsv");
    assert_eq!(config.export.file_prefix, "picked");
    assert_eq!(config.table.min_column_width, 4);
    assert_eq!(config.table.max_column_width, 20);
    // Unspecified sections keep their defaults
    assert_eq!(config.export.separator, "\t");
    assert_eq!(config.logging.level, "info");

    let options = config.session_options().unwrap();
    assert_eq!(options.delimiter, '|');
    assert_eq!(options.separator, b'\t');
}

#[test]
fn test_load_missing_explicit_file() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, RecmarkError::Config(_)));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[input]\ndelimiter = \";;\"\n").unwrap();

    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, RecmarkError::Config(_)));
}

#[test]
fn test_column_width_bounds_validated() {
    let err = AppConfig::from_toml_str("[table]\nmin_column_width = 50\nmax_column_width = 10\n")
        .unwrap_err();
    assert!(matches!(err, RecmarkError::Config(_)));

    let err = AppConfig::from_toml_str("[table]\nmin_column_width = 0\n").unwrap_err();
    assert!(matches!(err, RecmarkError::Config(_)));
}

#[test]
fn test_non_ascii_separator_rejected() {
    let err = AppConfig::from_toml_str("[export]\nseparator = \"→\"\n").unwrap_err();
    assert!(matches!(err, RecmarkError::Config(_)));
}

#[test]
fn test_save_to_file_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("recmark.toml");

    AppConfig::default().save_to_file(&path).unwrap();
    let loaded = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(loaded, AppConfig::default());
}
