//! Event handlers for file-related screens
//!
//! Handles: FileBrowser, ExportFileName

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle file browser screen input
pub fn handle_file_browser_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            app.browser.move_up();
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            app.browser.move_down();
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            if let Err(e) = app.toggle_show_all_files() {
                app.notify_error(&e);
            }
        }
        KeyCode::Enter => match app.browser_navigate() {
            Ok(Some(file_path)) => app.load_file(&file_path),
            Ok(None) => {
                // Entered new directory, continue browsing
            }
            Err(e) => app.notify_error(&e),
        },
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}

/// Handle export filename input screen
pub fn handle_export_filename_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.save_table(),
        KeyCode::Backspace => {
            app.export_filename_input.pop();
        }
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::TablePreview;
        }
        KeyCode::Char(c) => {
            app.export_filename_input.push(c);
        }
        _ => {}
    }
    false
}
