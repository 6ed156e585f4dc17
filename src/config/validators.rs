//! 配置值验证模块

use crate::errors::{RecmarkError, Result};

/// 验证值是否为单个字符（且不是换行符）
pub fn single_char(key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '\n' && c != '\r' => Ok(c),
        _ => Err(RecmarkError::config(format!(
            "{} must be exactly one character other than a line break, got {:?}",
            key, value
        ))),
    }
}

/// 验证值是否为单个 ASCII 字符（导出分隔符按字节写入）
pub fn single_ascii_char(key: &str, value: &str) -> Result<u8> {
    let c = single_char(key, value)?;
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(RecmarkError::config(format!(
            "{} must be an ASCII character, got {:?}",
            key, value
        )))
    }
}
