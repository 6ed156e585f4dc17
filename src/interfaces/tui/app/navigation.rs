//! Navigation and marking logic

use super::state::App;
use crate::errors::{RecmarkError, Result};
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    /// Navigation without a document only touches the status bar; anything
    /// else gets a notification.
    fn report(&mut self, err: RecmarkError) {
        match err {
            RecmarkError::NoDocument(_) => {
                self.set_error("No file loaded. Press [o] to open one".to_string())
            }
            other => self.notify_error(&other),
        }
    }

    fn after_move(&mut self, moved: Result<usize>) {
        if let Err(e) = moved {
            self.report(e);
        }
    }

    pub fn next_record(&mut self) {
        let moved = self.session.advance();
        self.after_move(moved);
    }

    pub fn prev_record(&mut self) {
        let moved = self.session.retract();
        self.after_move(moved);
    }

    pub fn first_record(&mut self) {
        let moved = self.session.jump_first();
        self.after_move(moved);
    }

    pub fn last_record(&mut self) {
        let moved = self.session.jump_last();
        self.after_move(moved);
    }

    pub fn toggle_mark(&mut self) {
        match self.session.toggle_mark() {
            Ok(true) => self.set_status(format!("Marked ({} total)", self.session.marked_count())),
            Ok(false) => {
                self.set_status(format!("Unmarked ({} total)", self.session.marked_count()))
            }
            Err(e) => self.report(e),
        }
    }

    pub fn clear_marks(&mut self) {
        if !self.session.is_loaded() {
            self.report(RecmarkError::no_document("no file has been loaded"));
            return;
        }
        self.session.clear_marks();
        self.set_status("All marks cleared".to_string());
    }

    // ========== 表格预览滚动 ==========

    fn table_max_scroll(&self) -> usize {
        self.table
            .as_ref()
            .map_or(0, |t| t.row_count().saturating_sub(1))
    }

    pub fn table_scroll_up(&mut self) {
        self.table_scroll = self.table_scroll.saturating_sub(1);
    }

    pub fn table_scroll_down(&mut self) {
        self.table_scroll = (self.table_scroll + 1).min(self.table_max_scroll());
    }

    pub fn table_page_up(&mut self) {
        self.table_scroll = self.table_scroll.saturating_sub(PAGE_SCROLL_STEP);
    }

    pub fn table_page_down(&mut self) {
        self.table_scroll = (self.table_scroll + PAGE_SCROLL_STEP).min(self.table_max_scroll());
    }
}
