// UI submodules
mod common;
mod exiting;
mod export_filename;
mod file_browser;
mod help;
mod main_screen;
mod notification;
mod table_preview;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar, footer_shortcuts};

// Re-export screen drawing functions
pub use exiting::draw_exiting_screen;
pub use export_filename::draw_export_filename_screen;
pub use file_browser::draw_file_browser_screen;
pub use help::draw_help_screen;
pub use main_screen::draw_main_screen;
pub use notification::draw_notification_screen;
pub use table_preview::draw_table_preview_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Draw the popup(s) belonging to a screen on top of the main screen
fn draw_overlay(frame: &mut Frame, app: &App, screen: CurrentScreen, area: Rect) {
    match screen {
        CurrentScreen::Main => {}
        CurrentScreen::TablePreview => draw_table_preview_screen(frame, app, area),
        CurrentScreen::ExportFileName => {
            draw_table_preview_screen(frame, app, area);
            draw_export_filename_screen(frame, app, area);
        }
        CurrentScreen::FileBrowser => draw_file_browser_screen(frame, app, area),
        CurrentScreen::Help => draw_help_screen(frame, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, area),
        CurrentScreen::Notification => {
            if let Some(n) = app.notification.as_ref()
                && n.return_to != CurrentScreen::Notification
            {
                draw_overlay(frame, app, n.return_to, area);
            }
            draw_notification_screen(frame, app, area);
        }
    }
}

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // The record view stays visible underneath every popup
    draw_main_screen(frame, app, main_chunks[1]);
    draw_overlay(frame, app, app.current_screen, main_chunks[1]);

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
