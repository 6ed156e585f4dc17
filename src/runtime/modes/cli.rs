//! CLI mode
//!
//! Runs one headless command and reports failures on stderr.

use std::io::Write;
use std::process::ExitCode;

use tracing::error;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::errors::{RecmarkError, Result};
use crate::interfaces::cli::run_cli_command;

/// Run CLI mode, returning the process exit code
pub fn run_cli(cmd: Commands, config: &AppConfig) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_and_flush(cmd, config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e.format_simple());
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}

/// Run the command, then flush `out`. A failed flush means lost output.
fn run_and_flush<W: Write>(cmd: Commands, config: &AppConfig, out: &mut W) -> Result<()> {
    run_cli_command(cmd, config, out)?;
    out.flush()
        .map_err(|e| RecmarkError::write(format!("Failed to flush output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Buffers writes, then refuses to flush them
    struct BrokenPipe(Vec<u8>);

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "pipe closed",
            ))
        }
    }

    fn export_cmd(file: PathBuf) -> Commands {
        Commands::Export {
            file,
            mark: vec![1],
            output: None,
        }
    }

    #[test]
    fn test_flush_failure_is_a_write_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("records.txt");
        std::fs::write(&source, "a;b\n").unwrap();

        let mut out = BrokenPipe(Vec::new());
        let err = run_and_flush(Commands::View { file: source }, &AppConfig::default(), &mut out)
            .unwrap_err();

        assert!(matches!(err, RecmarkError::Write(_)));
        assert!(err.message().starts_with("Failed to flush output"));
        assert!(!out.0.is_empty());
    }

    #[test]
    fn test_command_error_wins_over_flush() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut out = BrokenPipe(Vec::new());

        let err = run_and_flush(
            export_cmd(dir.path().join("missing.txt")),
            &AppConfig::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, RecmarkError::Read(_)));
    }

    #[test]
    fn test_successful_run_flushes() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("records.txt");
        std::fs::write(&source, "a;b\nc;d\n").unwrap();

        let mut out = Vec::new();
        run_and_flush(export_cmd(source), &AppConfig::default(), &mut out).unwrap();
        assert_eq!(out, b"a\tb\n");
    }
}
