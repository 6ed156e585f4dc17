//! Event handlers for record screens
//!
//! Handles: Main, TablePreview

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::Char('l')
        | KeyCode::Char('j')
        | KeyCode::Char('n') => app.next_record(),
        KeyCode::Left
        | KeyCode::Up
        | KeyCode::Char('h')
        | KeyCode::Char('k')
        | KeyCode::Char('p') => app.prev_record(),
        KeyCode::Home | KeyCode::Char('g') => app.first_record(),
        KeyCode::End | KeyCode::Char('G') => app.last_record(),
        KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_mark(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.clear_marks(),
        KeyCode::Char('o') | KeyCode::Char('O') => app.open_file_browser(),
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Enter => app.open_table_preview(),
        KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Handle table preview input
pub fn handle_table_preview_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.table_scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.table_scroll_down(),
        KeyCode::PageUp => app.table_page_up(),
        KeyCode::PageDown => app.table_page_down(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.start_export(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}
