//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal interface for stepping through records,
//! marking them and saving the marked subset

use std::io::{self, Stderr};
use std::path::Path;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

pub mod app;
pub mod constants;
pub mod event_handler;
pub mod ui;

use crate::config::AppConfig;
use app::App;
use ui::ui;

/// Run the TUI application, optionally opening `file` right away
pub fn run_tui(config: AppConfig, file: Option<&Path>) -> io::Result<()> {
    let mut app = App::new(config).map_err(|e| io::Error::other(e.format_simple()))?;
    if let Some(path) = file {
        app.load_file(path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    info!("TUI started");
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("TUI exited");

    res
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &*app))?;

        // Windows reports both press and release
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            return Ok(());
        }
    }
}
