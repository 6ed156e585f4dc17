use serde::{Deserialize, Serialize};
use std::path::Path;

use super::validators::{single_ascii_char, single_char};
use crate::errors::{RecmarkError, Result};
use crate::session::SessionOptions;

/// 默认配置文件名
pub const DEFAULT_CONFIG_PATH: &str = "recmark.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "RECMARK";

/// 应用配置（从 TOML 与环境变量加载）
///
/// 包含：
/// - input: 输入文件解析
/// - export: 导出格式与默认文件名
/// - table: 表格预览列宽
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：RECMARK，分隔符：__
    /// 示例：RECMARK__EXPORT__DEFAULT_EXTENSION=tsv
    ///
    /// An explicitly given path must exist; the default `recmark.toml` is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        if required && !path.exists() {
            return Err(RecmarkError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let settings = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, ignoring files and environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| RecmarkError::config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        single_char("input.delimiter", &self.input.delimiter)?;
        single_ascii_char("export.separator", &self.export.separator)?;

        if self.table.min_column_width == 0 {
            return Err(RecmarkError::config(
                "table.min_column_width must be at least 1",
            ));
        }
        if self.table.min_column_width > self.table.max_column_width {
            return Err(RecmarkError::config(format!(
                "table.min_column_width ({}) exceeds table.max_column_width ({})",
                self.table.min_column_width, self.table.max_column_width
            )));
        }
        if self.export.default_extension.contains(['/', '\\']) {
            return Err(RecmarkError::config(
                "export.default_extension must not contain path separators",
            ));
        }
        Ok(())
    }

    /// Session options derived from the validated configuration.
    pub fn session_options(&self) -> Result<SessionOptions> {
        Ok(SessionOptions {
            delimiter: single_char("input.delimiter", &self.input.delimiter)?,
            separator: single_ascii_char("export.separator", &self.export.separator)?,
        })
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| RecmarkError::write(e.to_string()))?;
        }

        std::fs::write(path.as_ref(), content).map_err(|e| {
            RecmarkError::write(format!(
                "Failed to write {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }
}

/// 输入解析配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Extensions shown by the file browser unless "all files" is on
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_extension")]
    pub default_extension: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

/// 表格预览配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_min_column_width")]
    pub min_column_width: u16,
    #[serde(default = "default_max_column_width")]
    pub max_column_width: u16,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_delimiter() -> String {
    crate::session::DEFAULT_DELIMITER.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "csv".to_string()]
}

fn default_separator() -> String {
    crate::session::DEFAULT_SEPARATOR.to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_file_prefix() -> String {
    "marked".to_string()
}

fn default_min_column_width() -> u16 {
    8
}

fn default_max_column_width() -> u16 {
    40
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            extensions: default_extensions(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            default_extension: default_extension(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_column_width: default_min_column_width(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let options = config.session_options().unwrap();
        assert_eq!(options.delimiter, ';');
        assert_eq!(options.separator, b'\t');
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [export]
            default_extension = "tsv"
            "#,
        )
        .unwrap();
        assert_eq!(config.export.default_extension, "tsv");
        assert_eq!(config.export.separator, "\t");
        assert_eq!(config.input.delimiter, ";");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        let err = AppConfig::from_toml_str("[input]\ndelimiter = \";;\"\n").unwrap_err();
        assert!(matches!(err, RecmarkError::Config(_)));
    }

    #[test]
    fn test_non_ascii_separator_rejected() {
        let err = AppConfig::from_toml_str("[export]\nseparator = \"¦\"\n").unwrap_err();
        assert!(matches!(err, RecmarkError::Config(_)));
    }

    #[test]
    fn test_column_width_bounds() {
        let err = AppConfig::from_toml_str(
            "[table]\nmin_column_width = 50\nmax_column_width = 10\n",
        )
        .unwrap_err();
        assert!(err.message().contains("exceeds"));
    }
}
