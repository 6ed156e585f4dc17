use std::fmt;

use super::document::Record;

/// 已标记 / 未标记符号
pub const MARKED_SYMBOL: &str = "✓";
pub const UNMARKED_SYMBOL: &str = "✗";

/// Read-only projection of the record under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentView<'a> {
    pub is_marked: bool,
    /// 1-based position and document length
    pub position: (usize, usize),
    pub fields: &'a Record,
}

impl CurrentView<'_> {
    pub fn mark_symbol(&self) -> &'static str {
        if self.is_marked {
            MARKED_SYMBOL
        } else {
            UNMARKED_SYMBOL
        }
    }
}

impl fmt::Display for CurrentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Line {}/{}: {}",
            self.mark_symbol(),
            self.position.0,
            self.position.1,
            self.fields.join(" | ")
        )
    }
}
