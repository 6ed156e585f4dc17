//! Session state
//!
//! Holds the loaded document, the cursor and the set of marked record
//! indices. Every operation either succeeds or leaves the session exactly as
//! it was.

mod document;
mod export;
mod view;

pub use document::{DEFAULT_DELIMITER, Document, Record};
pub use export::{DEFAULT_SEPARATOR, save_rows, write_rows};
pub use view::{CurrentView, MARKED_SYMBOL, UNMARKED_SYMBOL};

use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{RecmarkError, Result};

/// Parsing and export options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Input field delimiter
    pub delimiter: char,
    /// Output field separator (single byte)
    pub separator: u8,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            separator: DEFAULT_SEPARATOR as u8,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    options: SessionOptions,
    document: Option<Document>,
    source: Option<PathBuf>,
    cursor: usize,
    // BTreeSet keeps marks in ascending index order
    marked: BTreeSet<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Load a file, replacing the current document.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&Document> {
        let path = path.as_ref();
        let document = Document::open(path, self.options.delimiter)?;
        info!(
            "Loaded {} records from {}",
            document.len(),
            path.display()
        );
        Ok(self.replace_document(document, Some(path.to_path_buf())))
    }

    /// Load from an arbitrary reader. The session has no source path afterwards.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<&Document> {
        let document = Document::from_reader(reader, self.options.delimiter)?;
        info!("Loaded {} records from reader", document.len());
        Ok(self.replace_document(document, None))
    }

    fn replace_document(&mut self, document: Document, source: Option<PathBuf>) -> &Document {
        self.cursor = 0;
        self.marked.clear();
        self.source = source;
        self.document.insert(document)
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    fn require_document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| RecmarkError::no_document("no file has been loaded"))
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of records, 0 when nothing is loaded.
    pub fn len(&self) -> usize {
        self.document.as_ref().map_or(0, Document::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor index, `None` when nothing is loaded.
    pub fn cursor(&self) -> Option<usize> {
        self.document.as_ref().map(|_| self.cursor)
    }

    /// Move to the next record, clamped at the last one.
    pub fn advance(&mut self) -> Result<usize> {
        let last = self.require_document()?.len() - 1;
        self.cursor = (self.cursor + 1).min(last);
        debug!("Cursor advanced to {}", self.cursor);
        Ok(self.cursor)
    }

    /// Move to the previous record, clamped at the first one.
    pub fn retract(&mut self) -> Result<usize> {
        self.require_document()?;
        self.cursor = self.cursor.saturating_sub(1);
        debug!("Cursor retracted to {}", self.cursor);
        Ok(self.cursor)
    }

    pub fn jump_first(&mut self) -> Result<usize> {
        self.require_document()?;
        self.cursor = 0;
        Ok(self.cursor)
    }

    pub fn jump_last(&mut self) -> Result<usize> {
        self.cursor = self.require_document()?.len() - 1;
        Ok(self.cursor)
    }

    /// Flip the mark of the record under the cursor and return its new state.
    pub fn toggle_mark(&mut self) -> Result<bool> {
        self.require_document()?;
        let now_marked = if self.marked.remove(&self.cursor) {
            false
        } else {
            self.marked.insert(self.cursor);
            true
        };
        debug!(cursor = self.cursor, marked = now_marked, "Toggled mark");
        Ok(now_marked)
    }

    /// Mark the record at `index` (0-based). Marking twice is a no-op.
    pub fn mark(&mut self, index: usize) -> Result<()> {
        let len = self.require_document()?.len();
        if index >= len {
            return Err(RecmarkError::validation(format!(
                "record {} is out of range (1..={})",
                index + 1,
                len
            )));
        }
        self.marked.insert(index);
        Ok(())
    }

    pub fn clear_marks(&mut self) {
        self.marked.clear();
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Marked indices in ascending order.
    pub fn marked_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter().copied()
    }

    pub fn current_view(&self) -> Result<CurrentView<'_>> {
        let document = self.require_document()?;
        let fields = document
            .get(self.cursor)
            .ok_or_else(|| RecmarkError::no_document("cursor is outside the document"))?;
        Ok(CurrentView {
            is_marked: self.marked.contains(&self.cursor),
            position: (self.cursor + 1, document.len()),
            fields,
        })
    }

    /// Marked records ordered by ascending record index.
    pub fn export_marked(&self) -> Result<Vec<&Record>> {
        let document = self.require_document()?;
        if self.marked.is_empty() {
            return Err(RecmarkError::no_marked_records("no records are marked"));
        }
        Ok(self
            .marked
            .iter()
            .filter_map(|&index| document.get(index))
            .collect())
    }

    /// Write the marked records to `writer`. Returns the number of rows written.
    pub fn write_marked<W: Write>(&self, writer: W) -> Result<usize> {
        let rows = self.export_marked()?;
        write_rows(writer, &rows, self.options.separator)?;
        Ok(rows.len())
    }

    /// Write the marked records to a file. Nothing is created when no record
    /// is marked.
    pub fn save_marked<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let rows = self.export_marked()?;
        save_rows(path.as_ref(), &rows, self.options.separator)?;
        info!(
            "Saved {} marked records to {}",
            rows.len(),
            path.as_ref().display()
        );
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(text: &str) -> Session {
        let mut session = Session::new();
        session.load_reader(text.as_bytes()).unwrap();
        session
    }

    #[test]
    fn test_load_resets_cursor_and_marks() {
        let mut session = loaded("a;b\nc;d\ne;f\n");
        assert_eq!(session.len(), 3);
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.marked_count(), 0);

        session.advance().unwrap();
        session.toggle_mark().unwrap();
        session.load_reader("x\ny".as_bytes()).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.marked_count(), 0);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut session = loaded("a\nb\nc");
        session.advance().unwrap();
        session.toggle_mark().unwrap();

        let err = session.load_reader("\n \n".as_bytes()).unwrap_err();
        assert!(matches!(err, RecmarkError::EmptySource(_)));
        assert_eq!(session.len(), 3);
        assert_eq!(session.cursor(), Some(1));
        assert!(session.is_marked(1));
    }

    #[test]
    fn test_operations_without_document() {
        let mut session = Session::new();
        assert!(!session.is_loaded());
        assert_eq!(session.cursor(), None);
        assert!(matches!(session.advance(), Err(RecmarkError::NoDocument(_))));
        assert!(matches!(session.retract(), Err(RecmarkError::NoDocument(_))));
        assert!(matches!(
            session.toggle_mark(),
            Err(RecmarkError::NoDocument(_))
        ));
        assert!(matches!(
            session.current_view(),
            Err(RecmarkError::NoDocument(_))
        ));
        assert!(matches!(
            session.export_marked(),
            Err(RecmarkError::NoDocument(_))
        ));
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut session = loaded("1\n2\n3\n4");
        for _ in 0..3 {
            session.advance().unwrap();
        }
        assert_eq!(session.cursor(), Some(3));
        assert_eq!(session.advance().unwrap(), 3);
    }

    #[test]
    fn test_retract_clamps_at_start() {
        let mut session = loaded("1\n2");
        assert_eq!(session.retract().unwrap(), 0);
        session.advance().unwrap();
        assert_eq!(session.retract().unwrap(), 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_mixed_moves() {
        let mut session = loaded("a\nb\nc\nd\ne");
        let moves = [1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1];
        for (step, forward) in moves.iter().enumerate() {
            if *forward == 1 {
                session.advance().unwrap();
            } else {
                session.retract().unwrap();
            }
            let cursor = session.cursor().unwrap();
            assert!(cursor < session.len(), "step {} left bounds", step);
        }
    }

    #[test]
    fn test_single_record_document() {
        let mut session = loaded("only;one");
        assert_eq!(session.advance().unwrap(), 0);
        assert_eq!(session.retract().unwrap(), 0);
        assert_eq!(session.jump_last().unwrap(), 0);
    }

    #[test]
    fn test_toggle_mark_is_its_own_inverse() {
        let mut session = loaded("a\nb\nc");
        session.advance().unwrap();
        let before: Vec<usize> = session.marked_indices().collect();
        assert!(session.toggle_mark().unwrap());
        assert!(!session.toggle_mark().unwrap());
        let after: Vec<usize> = session.marked_indices().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_current_view_projection() {
        let mut session = loaded("a;b\nc;d");
        session.advance().unwrap();
        session.toggle_mark().unwrap();

        let view = session.current_view().unwrap();
        assert!(view.is_marked);
        assert_eq!(view.position, (2, 2));
        assert_eq!(view.fields.fields(), &["c", "d"]);
        assert_eq!(view.to_string(), "✓ Line 2/2: c | d");

        session.jump_first().unwrap();
        assert_eq!(session.current_view().unwrap().to_string(), "✗ Line 1/2: a | b");
    }

    #[test]
    fn test_export_orders_by_index_not_mark_order() {
        let mut session = loaded("r0\nr1\nr2\nr3\nr4");
        session.jump_last().unwrap();
        session.retract().unwrap();
        session.toggle_mark().unwrap(); // index 3
        session.jump_first().unwrap();
        session.advance().unwrap();
        session.toggle_mark().unwrap(); // index 1

        let rows = session.export_marked().unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.fields()[0].as_str()).collect();
        assert_eq!(names, vec!["r1", "r3"]);
    }

    #[test]
    fn test_export_without_marks() {
        let session = loaded("a\nb");
        assert!(matches!(
            session.export_marked(),
            Err(RecmarkError::NoMarkedRecords(_))
        ));
    }

    #[test]
    fn test_write_marked_round_trip() {
        let mut session = loaded("a;b\nc;d\ne;f");
        session.mark(0).unwrap();
        session.mark(2).unwrap();

        let mut out = Vec::new();
        assert_eq!(session.write_marked(&mut out).unwrap(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a\tb\ne\tf\n");
    }

    #[test]
    fn test_mark_out_of_range() {
        let mut session = loaded("a\nb");
        assert!(matches!(session.mark(2), Err(RecmarkError::Validation(_))));
        session.mark(1).unwrap();
        session.mark(1).unwrap();
        assert_eq!(session.marked_count(), 1);
    }

    #[test]
    fn test_clear_marks() {
        let mut session = loaded("a\nb");
        session.mark(0).unwrap();
        session.mark(1).unwrap();
        session.clear_marks();
        assert_eq!(session.marked_count(), 0);
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let mut session = loaded("1;2;3\n4\n5;6");
        session.mark(0).unwrap();
        session.mark(1).unwrap();
        let rows = session.export_marked().unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
    }
}
