use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_file_browser_screen(frame: &mut Frame, app: &App, area: Rect) {
    let browser = &app.browser;
    let inner_area = Popup::new(
        &format!(" File Browser - {} ", browser.current_dir.display()),
        popup::FILE_BROWSER,
    )
    .theme_color(Color::Cyan)
    .render(frame, area);

    let items: Vec<ListItem> = browser
        .entries
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("..");

            let (icon, color) = if path.is_dir() {
                ("[DIR]", Color::Blue)
            } else {
                ("[FILE]", Color::Green)
            };

            let style = if idx == browser.selected_index {
                Style::default().fg(color).bg(Color::DarkGray).bold()
            } else {
                Style::default().fg(color)
            };

            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(" ", style),
                Span::styled(file_name, style),
            ]))
        })
        .collect();

    let filter = if browser.show_all {
        "all files".to_string()
    } else {
        app.config
            .input
            .extensions
            .iter()
            .map(|e| format!("*.{}", e))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!("Select a file to open [{}]", filter))
            .border_style(Style::default().fg(Color::Yellow)),
    );

    let mut state = ListState::default();
    state.select(Some(browser.selected_index));
    frame.render_stateful_widget(list, inner_area, &mut state);
}
