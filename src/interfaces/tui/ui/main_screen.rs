use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
};

use super::widgets::MarkIndicator;
use crate::interfaces::tui::app::App;

fn empty_state(frame: &mut Frame, area: Rect) {
    let empty_text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            "No file loaded",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[o]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " to open a ';'-delimited text file",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let empty = Paragraph::new(empty_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Records")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(empty, area);
}

pub fn draw_main_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Ok(view) = app.session.current_view() else {
        empty_state(frame, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Current record line
            Constraint::Min(3),    // Field table
        ])
        .split(area);

    let indicator = MarkIndicator::new(view.is_marked);
    let summary = vec![
        Line::from(vec![
            indicator.span(),
            Span::styled(
                format!("   Line {}/{}", view.position.0, view.position.1),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            view.to_string(),
            Style::default().fg(Color::White),
        )),
    ];

    let record = Paragraph::new(summary)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(indicator.color()))
                .title("Current Record")
                .title_style(Style::default().fg(Color::Cyan).bold()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(record, chunks[0]);

    let header = Row::new(vec![
        Span::styled(
            "Field",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Value",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let rows: Vec<Row> = view
        .fields
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Row::new(vec![
                Span::styled(format!("{}", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(value.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(7), Constraint::Min(10)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(
                    "Fields ({}) | {} marked",
                    view.fields.len(),
                    app.session.marked_count()
                ))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .column_spacing(1);

    frame.render_widget(table, chunks[1]);
}
