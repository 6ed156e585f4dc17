use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_table_preview_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new(" Marked Records ", popup::TABLE_PREVIEW)
        .theme_color(Color::Green)
        .render(frame, area);

    let Some(table) = app.table.as_ref() else {
        let empty = Paragraph::new("No marked records").alignment(Alignment::Center);
        frame.render_widget(empty, inner_area);
        return;
    };

    let header = Row::new(
        table
            .headers
            .iter()
            .map(|h| {
                Span::styled(
                    h.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1);

    // border 2行 + header 1行 + header margin 1行
    let visible_height = (inner_area.height as usize).saturating_sub(4).max(1);
    let offset = app.table_scroll.min(table.row_count().saturating_sub(1));
    let end = (offset + visible_height).min(table.row_count());

    let rows: Vec<Row> = table.rows[offset..end]
        .iter()
        .map(|cells| Row::new(cells.iter().map(|c| c.as_str()).collect::<Vec<_>>()))
        .collect();

    let widths: Vec<Constraint> = table.widths.iter().map(|w| Constraint::Length(*w)).collect();

    let title = format!(
        "{} rows x {} columns ({}-{} shown)",
        table.row_count(),
        table.column_count(),
        offset + 1,
        end
    );

    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(2);

    frame.render_widget(widget, inner_area);
}
