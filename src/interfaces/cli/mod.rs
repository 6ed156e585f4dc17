//! CLI interface module
//!
//! Headless commands that share the session logic with the TUI.

pub mod commands;

use std::io::Write;

use crate::cli::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::errors::{RecmarkError, Result};
use commands::{config_generate, export_records, view_records};

/// Run a CLI command from clap-parsed input, writing normal output to `out`
pub fn run_cli_command<W: Write>(cmd: Commands, config: &AppConfig, out: &mut W) -> Result<()> {
    match cmd {
        Commands::View { file } => view_records(config, &file, out).map(|_| ()),

        Commands::Export { file, mark, output } => {
            export_records(config, &file, &mark, output.as_deref(), out).map(|_| ())
        }

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path.as_deref(), force, out).map(|_| ()),

        #[cfg(feature = "tui")]
        Commands::Tui { .. } => Err(RecmarkError::validation(
            "the tui command is interactive and cannot run headless",
        )),
    }
}
