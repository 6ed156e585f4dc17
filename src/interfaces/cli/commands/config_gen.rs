//! Generate config command

use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::errors::{RecmarkError, Result};

/// 默认示例配置路径
pub const DEFAULT_SAMPLE_PATH: &str = "recmark.example.toml";

/// Generate example configuration file
pub fn config_generate<W: Write>(
    output_path: Option<&Path>,
    force: bool,
    out: &mut W,
) -> Result<PathBuf> {
    let path = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH));

    if !force && path.exists() {
        return Err(RecmarkError::validation(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }

    AppConfig::default().save_to_file(&path)?;

    writeln!(
        out,
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.display().to_string().blue()
    )
    .map_err(|e| RecmarkError::write(e.to_string()))?;

    Ok(path)
}
