//! Table preview model
//!
//! Snapshot of the marked records as rows of strings with one auto-sized
//! width per column.

use crate::session::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<u16>,
}

impl TableView {
    /// Build the table. The column count is the widest row's field count;
    /// each width is the longer of header and widest cell, clamped to
    /// `[min_width, max_width]`.
    pub fn from_records(records: &[&Record], min_width: u16, max_width: u16) -> Self {
        let columns = records.iter().map(|r| r.len()).max().unwrap_or(0);
        let headers: Vec<String> = (1..=columns).map(|i| format!("Field {}", i)).collect();
        let rows: Vec<Vec<String>> = records.iter().map(|r| r.fields().to_vec()).collect();

        let widths = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest_cell = rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                let wanted = header.chars().count().max(widest_cell);
                let wanted = u16::try_from(wanted).unwrap_or(u16::MAX);
                wanted.clamp(min_width, max_width.max(min_width))
            })
            .collect();

        Self {
            headers,
            rows,
            widths,
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
