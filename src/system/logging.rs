//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use anyhow::{Context, Result};
use tracing_appender::rolling;

use super::panic_handler::RunMode;
use crate::config::LoggingConfig;

/// Where logs go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleTarget {
    /// stdout carries command output, so CLI logs use stderr
    Stderr,
    /// the terminal belongs to the UI
    Discard,
}

fn console_target(mode: RunMode) -> ConsoleTarget {
    match mode {
        RunMode::Cli => ConsoleTarget::Stderr,
        RunMode::Tui => ConsoleTarget::Discard,
    }
}

/// Pick the log destination.
///
/// A configured file wins in every mode. Without one, see [`console_target`].
fn build_writer(
    config: &LoggingConfig,
    mode: RunMode,
) -> Result<Box<dyn std::io::Write + Send + Sync>> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if config.enable_rotation => {
            let path = std::path::Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let filename_str = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("recmark.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename_str.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .context("Failed to create rolling log appender")?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .with_context(|| format!("Failed to open log file {}", log_file))?;
            Box::new(file)
        }
        None => match console_target(mode) {
            ConsoleTarget::Stderr => Box::new(std::io::stderr()),
            ConsoleTarget::Discard => Box::new(std::io::sink()),
        },
    };

    Ok(writer)
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &LoggingConfig,
    mode: RunMode,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let writer = build_writer(config, mode)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level filter: {}", config.level))?;

    let to_console = config.file.as_deref().is_none_or(str::is_empty);
    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console && mode == RunMode::Cli);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_logs_never_share_stdout() {
        assert_eq!(console_target(RunMode::Cli), ConsoleTarget::Stderr);
        assert_eq!(console_target(RunMode::Tui), ConsoleTarget::Discard);
    }

    #[test]
    fn test_configured_file_receives_logs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("recmark.log");
        let config = LoggingConfig {
            file: Some(path.to_string_lossy().into_owned()),
            enable_rotation: false,
            ..LoggingConfig::default()
        };

        let mut writer = build_writer(&config, RunMode::Cli).unwrap();
        writer.write_all(b"line\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
