//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的子状态模块

mod browser_state;

pub use browser_state::BrowserState;

use std::path::PathBuf;

use tracing::warn;

use super::table::TableView;
use crate::config::AppConfig;
use crate::errors::{RecmarkError, Severity};
use crate::session::Session;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    FileBrowser,
    TablePreview,
    ExportFileName,
    Notification,
    Help,
    Exiting,
}

/// 模态通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Screen shown again once the notification is dismissed
    pub return_to: CurrentScreen,
}

pub struct App {
    pub session: Session,
    pub config: AppConfig,
    pub current_screen: CurrentScreen,
    pub notification: Option<Notification>,

    // UI state
    pub status_message: String,
    pub error_message: String,

    // Table preview
    pub table: Option<TableView>,
    pub table_scroll: usize,

    // File browser / export
    pub browser: BrowserState,
    pub export_filename_input: String,
}

impl App {
    pub fn new(config: AppConfig) -> Result<App, RecmarkError> {
        let session = Session::with_options(config.session_options()?);
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Ok(App {
            session,
            config,
            current_screen: CurrentScreen::Main,
            notification: None,
            status_message: String::new(),
            error_message: String::new(),
            table: None,
            table_scroll: 0,
            browser: BrowserState::new(current_dir),
            export_filename_input: String::new(),
        })
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// Show a modal notification over the current screen.
    pub fn notify(&mut self, severity: Severity, title: &str, message: String) {
        let return_to = match self.current_screen {
            // Never stack notifications; keep the first return target.
            CurrentScreen::Notification => self
                .notification
                .as_ref()
                .map_or(CurrentScreen::Main, |n| n.return_to),
            screen => screen,
        };
        self.notification = Some(Notification {
            severity,
            title: title.to_string(),
            message,
            return_to,
        });
        self.current_screen = CurrentScreen::Notification;
    }

    /// Report a failed operation as a notification and in the status bar.
    pub fn notify_error(&mut self, err: &RecmarkError) {
        warn!("{}", err.format_simple());
        self.set_error(err.format_simple());
        self.notify(err.severity(), err.error_type(), err.message().to_string());
    }

    pub fn dismiss_notification(&mut self) {
        self.current_screen = self
            .notification
            .take()
            .map_or(CurrentScreen::Main, |n| n.return_to);
    }

    /// File name of the loaded source, for the title bar.
    pub fn source_name(&self) -> Option<String> {
        self.session.source_path().map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
    }
}
