use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Draw title bar with version, file and mark statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("recmark TUI", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(name) = app.source_name() {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} ", name),
            Style::default().fg(Color::White),
        ));
    }

    if app.session.is_loaded() {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Records: {} ", app.session.len()),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("Marked: {} ", app.session.marked_count()),
            Style::default().fg(Color::Green),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Keyboard shortcuts shown in the footer for a screen
pub fn footer_shortcuts(screen: CurrentScreen) -> Vec<(&'static str, &'static str, Color)> {
    match screen {
        CurrentScreen::Main => vec![
            ("o", "Open", Color::Green),
            ("Left/Right", "Prev/Next", Color::Cyan),
            ("Space", "Mark", Color::Yellow),
            ("t", "Table", Color::Magenta),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::TablePreview => vec![
            ("Up/Down", "Scroll", Color::Cyan),
            ("s", "Save", Color::Green),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::FileBrowser => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Select/Open", Color::Green),
            ("a", "All Files", Color::Yellow),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::ExportFileName => vec![
            ("Enter", "Confirm", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Notification => vec![("Enter/Esc", "Dismiss", Color::Cyan)],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = footer_shortcuts(app.current_screen);

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
