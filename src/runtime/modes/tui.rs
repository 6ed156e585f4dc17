//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use tracing::error;

use crate::config::AppConfig;

/// Run TUI mode, returning the process exit code
pub fn run_tui(config: AppConfig, file: Option<&Path>) -> ExitCode {
    match crate::interfaces::tui::run_tui(config, file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("TUI error: {}", e);
            eprintln!("{} {}", "TUI error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
