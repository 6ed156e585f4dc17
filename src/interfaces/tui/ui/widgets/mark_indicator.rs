//! 标记状态指示器
//!
//! 显示记录是否已被标记（✓ / ✗）

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::interfaces::tui::constants::colors;
use crate::session::{MARKED_SYMBOL, UNMARKED_SYMBOL};

/// 标记状态指示器组件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkIndicator {
    pub marked: bool,
}

impl MarkIndicator {
    pub fn new(marked: bool) -> Self {
        Self { marked }
    }

    /// 获取符号
    pub fn symbol(&self) -> &'static str {
        if self.marked {
            MARKED_SYMBOL
        } else {
            UNMARKED_SYMBOL
        }
    }

    /// 获取状态文本
    pub fn label(&self) -> &'static str {
        if self.marked { "MARKED" } else { "UNMARKED" }
    }

    /// 获取状态颜色
    pub fn color(&self) -> Color {
        if self.marked {
            colors::SUCCESS
        } else {
            colors::MUTED
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.color()).bold()
    }

    /// `✓ MARKED` 形式的带样式文本
    pub fn span(&self) -> Span<'static> {
        Span::styled(format!("{} {}", self.symbol(), self.label()), self.style())
    }
}
