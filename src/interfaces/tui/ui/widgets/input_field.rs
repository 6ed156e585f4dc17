//! 通用输入框组件
//!
//! 用于单行文本输入，支持：
//! - 激活状态高亮
//! - 字符计数
//! - 占位符提示

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Filename", &app.export_filename_input)
///     .active(true)
///     .placeholder("e.g. marked.txt")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 占位符文本
    placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        if self.value.is_empty() {
            return match self.placeholder {
                Some(placeholder) => format!("{} ({})", self.title, placeholder),
                None => self.title.to_string(),
            };
        }
        format!("{} ({} chars)", self.title, self.value.chars().count())
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 渲染输入框，`area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
