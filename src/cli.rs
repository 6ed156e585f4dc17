//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for recmark using clap's derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recmark - step through delimited records, mark some, export them as a table
#[derive(Parser, Debug)]
#[command(name = "recmark")]
#[command(version)]
#[command(about = "Mark records of a delimited text file and export them", long_about = None)]
pub struct Cli {
    /// Configuration file (default: recmark.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui {
        /// File to load on startup
        file: Option<PathBuf>,
    },

    /// Print every record of a file
    View {
        /// Input file
        file: PathBuf,
    },

    /// Export selected records as a tab-separated table
    ///
    /// Records are numbered from 1 as shown by `view`. The output is always
    /// in file order, whatever the order of --mark values.
    Export {
        /// Input file
        file: PathBuf,

        /// Record numbers to export (comma separated or repeated)
        #[arg(long, short = 'm', value_delimiter = ',')]
        mark: Vec<usize>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: recmark.example.toml)
        output_path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
