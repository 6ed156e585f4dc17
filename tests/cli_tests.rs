//! CLI 命令集成测试

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use recmark::cli::{Cli, Commands, ConfigCommands};
use recmark::config::AppConfig;
use recmark::errors::RecmarkError;
use recmark::interfaces::cli::commands::{config_generate, export_records, view_records};
use recmark::interfaces::cli::run_cli_command;
use tempfile::TempDir;

fn setup_source(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.txt");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_view_lists_every_record() {
    let (_dir, source) = setup_source("a;b\nc;d\ne;f\n");
    let mut out = Vec::new();

    let total = view_records(&AppConfig::default(), &source, &mut out).unwrap();
    assert_eq!(total, 3);

    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Line 1/3:"));
    assert!(stdout.contains("a | b"));
    assert!(stdout.contains("Line 3/3:"));
    assert!(stdout.contains("e | f"));
}

#[test]
fn test_view_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    let err = view_records(&AppConfig::default(), &dir.path().join("nope.txt"), &mut out)
        .unwrap_err();
    assert!(matches!(err, RecmarkError::Read(_)));
}

#[test]
fn test_export_to_stdout_in_file_order() {
    let (_dir, source) = setup_source("a;b\nc;d\ne;f\n");
    let mut out = Vec::new();

    let written = export_records(&AppConfig::default(), &source, &[3, 1], None, &mut out).unwrap();
    assert_eq!(written, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "a\tb\ne\tf\n");
}

#[test]
fn test_export_to_file() {
    let (dir, source) = setup_source("a;b\nc;d\ne;f\n");
    let output = dir.path().join("marked.txt");
    let mut out = Vec::new();

    export_records(&AppConfig::default(), &source, &[2], Some(&output), &mut out).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "c\td\n");

    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Exported"));
}

#[test]
fn test_export_without_marks() {
    let (dir, source) = setup_source("a;b\n");
    let output = dir.path().join("marked.txt");
    let mut out = Vec::new();

    let err = export_records(&AppConfig::default(), &source, &[], Some(&output), &mut out)
        .unwrap_err();
    assert!(matches!(err, RecmarkError::NoMarkedRecords(_)));
    assert!(!output.exists());
}

#[test]
fn test_export_rejects_bad_record_numbers() {
    let (_dir, source) = setup_source("a;b\nc;d\n");
    let mut out = Vec::new();

    let err = export_records(&AppConfig::default(), &source, &[0], None, &mut out).unwrap_err();
    assert!(matches!(err, RecmarkError::Validation(_)));

    let err = export_records(&AppConfig::default(), &source, &[3], None, &mut out).unwrap_err();
    assert!(matches!(err, RecmarkError::Validation(_)));
}

#[test]
fn test_export_uses_configured_separator() {
    let (_dir, source) = setup_source("a;b\n");
    let config = AppConfig::from_toml_str("[export]\nseparator = \",\"\n").unwrap();
    let mut out = Vec::new();

    export_records(&config, &source, &[1], None, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a,b\n");
}

#[test]
fn test_config_generate_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recmark.toml");
    let mut out = Vec::new();

    config_generate(Some(&path), false, &mut out).unwrap();
    let generated = fs::read_to_string(&path).unwrap();
    assert!(generated.contains("[input]"));
    assert_eq!(AppConfig::from_toml_str(&generated).unwrap(), AppConfig::default());

    let err = config_generate(Some(&path), false, &mut out).unwrap_err();
    assert!(matches!(err, RecmarkError::Validation(_)));

    config_generate(Some(&path), true, &mut out).unwrap();
}

#[test]
fn test_run_cli_command_dispatch() {
    let (_dir, source) = setup_source("a;b\nc;d\ne;f\n");
    let cli = Cli::try_parse_from([
        "recmark",
        "export",
        source.to_str().unwrap(),
        "--mark",
        "1,3",
    ])
    .unwrap();

    let mut out = Vec::new();
    run_cli_command(cli.command.unwrap(), &AppConfig::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a\tb\ne\tf\n");
}

#[test]
fn test_parse_config_generate() {
    let cli = Cli::try_parse_from(["recmark", "config", "generate", "out.toml", "--force"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Config {
            action: ConfigCommands::Generate {
                output_path: Some(PathBuf::from("out.toml")),
                force: true,
            }
        })
    );
}

#[test]
fn test_export_binary_stdout_holds_only_rows() {
    let (dir, source) = setup_source("a;b\nc;d\ne;f\n");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_recmark"))
        .current_dir(dir.path())
        .env("RECMARK__LOGGING__LEVEL", "info")
        .env_remove("RECMARK__LOGGING__FILE")
        .args(["export", source.to_str().unwrap(), "--mark", "3,1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "a\tb\ne\tf\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Exported 2 records"));
}
