//! View records command

use colored::Colorize;
use std::io::Write;
use std::path::Path;

use crate::config::AppConfig;
use crate::errors::{RecmarkError, Result};
use crate::session::Session;

/// Print every record of `file` with its 1-based line number.
pub fn view_records<W: Write>(config: &AppConfig, file: &Path, out: &mut W) -> Result<usize> {
    let mut session = Session::with_options(config.session_options()?);
    let document = session.load(file)?;
    let total = document.len();

    let io_err = |e: std::io::Error| RecmarkError::write(format!("Failed to print: {}", e));

    writeln!(out, "{}", file.display().to_string().bold().green()).map_err(io_err)?;
    writeln!(out).map_err(io_err)?;
    for (index, record) in document.records().iter().enumerate() {
        writeln!(
            out,
            "  {} {}",
            format!("Line {}/{}:", index + 1, total).cyan(),
            record.join(" | ")
        )
        .map_err(io_err)?;
    }
    writeln!(out).map_err(io_err)?;
    writeln!(
        out,
        "{} Total {} records",
        "ℹ".bold().blue(),
        total.to_string().green()
    )
    .map_err(io_err)?;

    Ok(total)
}
