//! File operations: open, table preview, export, and file browser

use std::path::{Path, PathBuf};

use tracing::info;

use super::state::{App, CurrentScreen};
use super::table::TableView;
use crate::errors::{RecmarkError, Result, Severity};

impl App {
    /// Load a file into the session and return to the main screen.
    ///
    /// On failure the previous document stays loaded.
    pub fn load_file(&mut self, path: &Path) {
        self.current_screen = CurrentScreen::Main;
        match self.session.load(path).map(|doc| doc.len()) {
            Ok(count) => {
                self.table = None;
                self.table_scroll = 0;
                self.set_status(format!(
                    "Loaded file: {}. Records: {}",
                    path.display(),
                    count
                ));
            }
            Err(e) => self.notify_error(&e),
        }
    }

    pub fn open_file_browser(&mut self) {
        match self.load_directory() {
            Ok(()) => self.current_screen = CurrentScreen::FileBrowser,
            Err(e) => self.notify_error(&e),
        }
    }

    /// Snapshot the marked records into a table and show it.
    pub fn open_table_preview(&mut self) {
        let min = self.config.table.min_column_width;
        let max = self.config.table.max_column_width;
        let table = self
            .session
            .export_marked()
            .map(|rows| TableView::from_records(&rows, min, max));

        match table {
            Ok(table) => {
                self.table = Some(table);
                self.table_scroll = 0;
                self.current_screen = CurrentScreen::TablePreview;
            }
            Err(e) => self.notify_error(&e),
        }
    }

    /// Suggested export name, e.g. `marked_20240101_120000.txt`
    pub fn default_export_filename(&self) -> String {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let ext = &self.config.export.default_extension;
        if ext.is_empty() {
            format!("{}_{}", self.config.export.file_prefix, stamp)
        } else {
            format!("{}_{}.{}", self.config.export.file_prefix, stamp, ext)
        }
    }

    pub fn start_export(&mut self) {
        self.export_filename_input = self.default_export_filename();
        self.current_screen = CurrentScreen::ExportFileName;
    }

    /// Turn the filename input into a destination path.
    ///
    /// Relative names resolve against the browser's directory; a name
    /// without extension gets the configured default one.
    pub fn resolve_export_path(&self, input: &str) -> Result<PathBuf> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RecmarkError::validation("Filename cannot be empty"));
        }

        let mut path = PathBuf::from(input);
        let ext = &self.config.export.default_extension;
        if path.extension().is_none() && !ext.is_empty() {
            path.set_extension(ext);
        }

        if path.is_relative() {
            path = self.browser.current_dir.join(path);
        }
        Ok(path)
    }

    /// Save the marked records to the path typed in the export screen.
    pub fn save_table(&mut self) {
        let saved = self
            .resolve_export_path(&self.export_filename_input)
            .and_then(|path| self.session.save_marked(&path).map(|count| (path, count)));

        match saved {
            Ok((path, count)) => {
                self.current_screen = CurrentScreen::TablePreview;
                self.set_status(format!("Saved {} records to {}", count, path.display()));
                self.notify(
                    Severity::Info,
                    "Success",
                    format!("Table saved to: {}", path.display()),
                );
            }
            // Stay on the filename screen so the name can be corrected
            Err(e) => self.notify_error(&e),
        }
    }

    /// Load directory entries for file browser
    pub fn load_directory(&mut self) -> Result<()> {
        use std::fs;

        let entries = fs::read_dir(&self.browser.current_dir).map_err(|e| {
            RecmarkError::read(format!(
                "Failed to read directory {}: {}",
                self.browser.current_dir.display(),
                e
            ))
        })?;

        // Sort entries: directories first, then files
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            } else if self.browser.accepts(&path, &self.config.input.extensions) {
                files.push(path);
            }
        }

        dirs.sort();
        files.sort();

        self.browser.entries.clear();
        self.browser.selected_index = 0;

        // Add parent directory entry if not at root
        if self.browser.current_dir.parent().is_some() {
            self.browser.entries.push(self.browser.current_dir.join(".."));
        }
        self.browser.entries.extend(dirs);
        self.browser.entries.extend(files);

        Ok(())
    }

    /// Navigate into selected directory or select file
    pub fn browser_navigate(&mut self) -> Result<Option<PathBuf>> {
        let Some(selected) = self.browser.selected().cloned() else {
            return Ok(None);
        };

        if selected.is_dir() {
            let target = selected
                .canonicalize()
                .map_err(|e| RecmarkError::read(e.to_string()))?;
            let previous = std::mem::replace(&mut self.browser.current_dir, target);
            if let Err(e) = self.load_directory() {
                self.browser.current_dir = previous;
                return Err(e);
            }
            info!("Browsing {}", self.browser.current_dir.display());
            Ok(None)
        } else {
            Ok(Some(selected))
        }
    }

    /// Switch between the extension filter and all files
    pub fn toggle_show_all_files(&mut self) -> Result<()> {
        self.browser.show_all = !self.browser.show_all;
        self.load_directory()
    }
}
