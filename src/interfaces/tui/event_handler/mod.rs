//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - record_screens: Main, TablePreview
//! - file_screens: FileBrowser, ExportFileName
//! - misc_screens: Notification, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod file_screens;
mod misc_screens;
mod record_screens;

use file_screens::*;
use misc_screens::*;
use record_screens::*;

/// Handle keyboard input based on current screen. Returns true to exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::TablePreview => handle_table_preview_screen(app, key_code),
        CurrentScreen::FileBrowser => handle_file_browser_screen(app, key_code),
        CurrentScreen::ExportFileName => handle_export_filename_screen(app, key_code),
        CurrentScreen::Notification => handle_notification_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
