use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::errors::Severity;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => colors::SUCCESS,
        Severity::Warning => colors::WARNING,
        Severity::Error => colors::ERROR,
    }
}

pub fn draw_notification_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = app.notification.as_ref() else {
        return;
    };

    let title = format!(" {} ", notification.title);
    let inner_area = Popup::new(&title, popup::NOTIFICATION)
        .theme_color(severity_color(notification.severity))
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            notification.message.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Enter] to continue",
            Style::default().fg(colors::MUTED),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}
