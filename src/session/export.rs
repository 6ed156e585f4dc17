//! Tab-separated export of marked records
//!
//! One record per line, fields joined by a single separator byte, no header
//! and no quoting. Ragged rows are written as-is.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::document::Record;
use crate::errors::{RecmarkError, Result};

/// 默认输出分隔符
pub const DEFAULT_SEPARATOR: char = '\t';

/// Write `rows` to `writer`, one line each.
pub fn write_rows<W: Write>(writer: W, rows: &[&Record], separator: u8) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(separator)
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in rows {
        csv_writer
            .write_record(row.fields())
            .map_err(|e| RecmarkError::write(format!("Failed to write row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| RecmarkError::write(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

/// Create (or truncate) `path` and write `rows` to it.
pub fn save_rows<P: AsRef<Path>>(path: P, rows: &[&Record], separator: u8) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        RecmarkError::write(format!("Failed to create {}: {}", path.display(), e))
    })?;
    write_rows(BufWriter::new(file), rows, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[&Record], separator: u8) -> String {
        let mut out = Vec::new();
        write_rows(&mut out, rows, separator).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_rows_tab_separated() {
        let a = Record::parse("a;b", ';');
        let e = Record::parse("e;f", ';');
        assert_eq!(render(&[&a, &e], b'\t'), "a\tb\ne\tf\n");
    }

    #[test]
    fn test_write_rows_never_quotes() {
        let row = Record::parse("say \"hi\";x,y; spaced ", ';');
        assert_eq!(render(&[&row], b'\t'), "say \"hi\"\tx,y\t spaced \n");
    }

    #[test]
    fn test_write_rows_ragged() {
        let long = Record::parse("1;2;3", ';');
        let short = Record::parse("4", ';');
        assert_eq!(render(&[&long, &short], b'\t'), "1\t2\t3\n4\n");
    }

    #[test]
    fn test_write_rows_custom_separator() {
        let row = Record::parse("a;b;c", ';');
        assert_eq!(render(&[&row], b','), "a,b,c\n");
    }
}
