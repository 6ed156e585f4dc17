use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecmarkError {
    Read(String),
    EmptySource(String),
    NoDocument(String),
    NoMarkedRecords(String),
    Write(String),
    Config(String),
    Validation(String),
}

/// 通知级别，决定错误在界面上以警告还是错误呈现
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl RecmarkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            RecmarkError::Read(_) => "E001",
            RecmarkError::EmptySource(_) => "E002",
            RecmarkError::NoDocument(_) => "E003",
            RecmarkError::NoMarkedRecords(_) => "E004",
            RecmarkError::Write(_) => "E005",
            RecmarkError::Config(_) => "E006",
            RecmarkError::Validation(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            RecmarkError::Read(_) => "Read Error",
            RecmarkError::EmptySource(_) => "Empty Source",
            RecmarkError::NoDocument(_) => "No Document",
            RecmarkError::NoMarkedRecords(_) => "No Marked Records",
            RecmarkError::Write(_) => "Write Error",
            RecmarkError::Config(_) => "Configuration Error",
            RecmarkError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            RecmarkError::Read(msg) => msg,
            RecmarkError::EmptySource(msg) => msg,
            RecmarkError::NoDocument(msg) => msg,
            RecmarkError::NoMarkedRecords(msg) => msg,
            RecmarkError::Write(msg) => msg,
            RecmarkError::Config(msg) => msg,
            RecmarkError::Validation(msg) => msg,
        }
    }

    /// User-facing problems the user can fix by acting differently are
    /// warnings; I/O and configuration failures are errors.
    pub fn severity(&self) -> Severity {
        match self {
            RecmarkError::EmptySource(_)
            | RecmarkError::NoDocument(_)
            | RecmarkError::NoMarkedRecords(_)
            | RecmarkError::Validation(_) => Severity::Warning,
            RecmarkError::Read(_) | RecmarkError::Write(_) | RecmarkError::Config(_) => {
                Severity::Error
            }
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 通知与日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RecmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RecmarkError {}

// 便捷的构造函数
impl RecmarkError {
    pub fn read<T: Into<String>>(msg: T) -> Self {
        RecmarkError::Read(msg.into())
    }

    pub fn empty_source<T: Into<String>>(msg: T) -> Self {
        RecmarkError::EmptySource(msg.into())
    }

    pub fn no_document<T: Into<String>>(msg: T) -> Self {
        RecmarkError::NoDocument(msg.into())
    }

    pub fn no_marked_records<T: Into<String>>(msg: T) -> Self {
        RecmarkError::NoMarkedRecords(msg.into())
    }

    pub fn write<T: Into<String>>(msg: T) -> Self {
        RecmarkError::Write(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        RecmarkError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        RecmarkError::Validation(msg.into())
    }
}

// An io::Error reaching a boundary without context came from reading; the
// write paths map their errors explicitly.
impl From<std::io::Error> for RecmarkError {
    fn from(err: std::io::Error) -> Self {
        RecmarkError::Read(err.to_string())
    }
}

impl From<config::ConfigError> for RecmarkError {
    fn from(err: config::ConfigError) -> Self {
        RecmarkError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RecmarkError {
    fn from(err: toml::ser::Error) -> Self {
        RecmarkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecmarkError>;
