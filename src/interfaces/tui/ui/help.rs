use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(keys: &'static str, desc: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .theme_color(Color::Cyan)
        .render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("NAVIGATION"),
        entry("Right, l, n, j", "Next record", Color::Cyan),
        entry("Left, h, p, k", "Previous record", Color::Cyan),
        entry("Home, g", "First record", Color::Cyan),
        entry("End, G", "Last record", Color::Cyan),
        Line::from(""),
        section("MARKING"),
        entry("Space, m", "Toggle mark on current record", Color::Green),
        entry("c", "Clear all marks", Color::Red),
        Line::from(""),
        section("FILES"),
        entry("o", "Open a file", Color::Green),
        entry("t, Enter", "Preview marked records as a table", Color::Magenta),
        entry("s (in table)", "Save table as tab-separated file", Color::Green),
        entry("a (in browser)", "Show all files / filtered files", Color::Yellow),
        Line::from(""),
        section("GENERAL"),
        entry("?", "Show this help", Color::Cyan),
        entry("Esc", "Back / cancel", Color::Red),
        entry("q", "Quit application", Color::Magenta),
        Line::from(""),
        section("MARK INDICATORS"),
        entry("✓", "Record is marked", Color::Green),
        entry("✗", "Record is not marked", Color::DarkGray),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press [Esc] to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help_para = Paragraph::new(help_text).alignment(Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
