//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one-shot commands)
//! - TUI mode (Terminal UI)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::RunMode;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

impl Mode {
    /// Logging and panic behaviour for this mode
    pub fn run_mode(&self) -> RunMode {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => RunMode::Tui,
            _ => RunMode::Cli,
        }
    }
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand or `tui` with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(feature = "tui")]
    if matches!(command, None | Some(Commands::Tui { .. })) {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if command.is_some() {
        return Mode::Cli;
    }

    Mode::Unknown
}
