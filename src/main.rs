use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use recmark::cli::Cli;
#[cfg(feature = "tui")]
use recmark::cli::Commands;
use recmark::runtime::lifetime::startup::prepare_startup;
use recmark::runtime::modes::{self, Mode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = modes::detect_mode(cli.command.as_ref());

    if mode == Mode::Unknown {
        eprintln!(
            "{} no subcommand given and TUI support is not compiled in. See --help",
            "Error:".red().bold()
        );
        return ExitCode::FAILURE;
    }

    let ctx = match prepare_startup(cli.config.as_deref(), mode.run_mode()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {:#}", "Startup failed:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    match (mode, cli.command) {
        #[cfg(feature = "tui")]
        (Mode::Tui, Some(Commands::Tui { file })) => modes::run_tui(ctx.config, file.as_deref()),
        #[cfg(feature = "tui")]
        (Mode::Tui, _) => modes::run_tui(ctx.config, None),
        #[cfg(feature = "cli")]
        (Mode::Cli, Some(cmd)) => modes::run_cli(cmd, &ctx.config),
        _ => ExitCode::FAILURE,
    }
}
