use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_export_filename_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new(" Save Marked Records ", popup::EXPORT_FILENAME)
        .title_color(Color::Cyan)
        .border_color(Color::Green)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Instructions
            Constraint::Length(3), // Filename input
            Constraint::Length(1), // Preview
            Constraint::Min(0),
        ])
        .split(inner_area);

    let ext = &app.config.export.default_extension;
    let hint = if ext.is_empty() {
        "Enter filename for the tab-separated table".to_string()
    } else {
        format!("Enter filename (will add .{} if missing)", ext)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::Gray))),
        chunks[0],
    );

    InputField::new("Filename", &app.export_filename_input)
        .active(true)
        .placeholder("e.g. marked.txt")
        .render(frame, chunks[1]);

    let preview_text = match app.resolve_export_path(&app.export_filename_input) {
        Ok(path) => format!("Will save as: {}", path.display()),
        Err(_) => "No filename entered".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            preview_text,
            Style::default().fg(Color::Cyan),
        ))),
        chunks[2],
    );
}
