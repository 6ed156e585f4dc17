//! Export marked records command

use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::{RecmarkError, Result};
use crate::session::Session;

/// Load `file`, mark the given 1-based record numbers and export them.
///
/// With `output` set the table goes to that file and a summary is printed to
/// `out`; otherwise the table itself is written to `out`.
pub fn export_records<W: Write>(
    config: &AppConfig,
    file: &Path,
    marks: &[usize],
    output: Option<&Path>,
    out: &mut W,
) -> Result<usize> {
    let mut session = Session::with_options(config.session_options()?);
    session.load(file)?;

    for &number in marks {
        if number == 0 {
            return Err(RecmarkError::validation("record numbers start at 1"));
        }
        session.mark(number - 1)?;
    }

    match output {
        Some(path) => {
            let written = session.save_marked(path)?;
            writeln!(
                out,
                "{} Exported {} records to {}",
                "✓".bold().green(),
                written.to_string().green(),
                path.display().to_string().blue()
            )
            .map_err(|e| RecmarkError::write(e.to_string()))?;
            Ok(written)
        }
        None => {
            let written = session.write_marked(&mut *out)?;
            info!("Exported {} records to stdout", written);
            Ok(written)
        }
    }
}
