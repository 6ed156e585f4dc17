//! Records and documents
//!
//! A document is the ordered set of records parsed from one input source.
//! Each non-blank line becomes one record; fields are separated by a single
//! delimiter character with no quoting or escaping.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{RecmarkError, Result};

/// 默认字段分隔符
pub const DEFAULT_DELIMITER: char = ';';

/// One parsed row of delimited fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Split a single line into fields.
    ///
    /// The line is used as given; callers strip surrounding whitespace.
    pub fn parse(line: &str, delimiter: char) -> Self {
        Self {
            fields: line.split(delimiter).map(str::to_owned).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Join the fields with `separator` for display.
    pub fn join(&self, separator: &str) -> String {
        self.fields.join(separator)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The full ordered set of records from one load. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Parse document text.
    ///
    /// Whitespace-only lines are skipped. Other lines are stripped of
    /// surrounding whitespace (which also drops the `\r` of CRLF files),
    /// except the delimiter itself: with a tab or space delimiter, leading
    /// and trailing empty fields survive.
    pub fn parse(text: &str, delimiter: char) -> Result<Self> {
        let records: Vec<Record> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim_matches(|c: char| c.is_whitespace() && c != delimiter))
            .map(|line| Record::parse(line, delimiter))
            .collect();

        if records.is_empty() {
            return Err(RecmarkError::empty_source(
                "source contains no non-blank lines",
            ));
        }

        Ok(Self { records })
    }

    /// Read and parse a whole UTF-8 source.
    pub fn from_reader<R: Read>(reader: R, delimiter: char) -> Result<Self> {
        let mut text = String::new();
        BufReader::new(reader)
            .read_to_string(&mut text)
            .map_err(|e| RecmarkError::read(format!("Failed to read source: {}", e)))?;
        Self::parse(&text, delimiter)
    }

    /// Open and parse a file. The handle is released before returning.
    pub fn open<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            RecmarkError::read(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file, delimiter).map_err(|e| match e {
            RecmarkError::Read(msg) => RecmarkError::read(format!("{} ({})", msg, path.display())),
            RecmarkError::EmptySource(_) => {
                RecmarkError::empty_source(format!("{} is empty", path.display()))
            }
            other => other,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully parsed document.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parse_keeps_empty_fields() {
        let record = Record::parse("a;;b;", ';');
        assert_eq!(record.fields(), &["a", "", "b", ""]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_record_parse_does_not_unquote() {
        let record = Record::parse("\"x;y\";z", ';');
        assert_eq!(record.fields(), &["\"x", "y\"", "z"]);
    }

    #[test]
    fn test_document_skips_blank_lines_and_trims() {
        let doc = Document::parse("  a;b  \r\n\n   \nc;d\r\n", ';').unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(0).unwrap().fields(), &["a", "b"]);
        assert_eq!(doc.get(1).unwrap().fields(), &["c", "d"]);
    }

    #[test]
    fn test_document_inner_whitespace_preserved() {
        let doc = Document::parse("a ; b", ';').unwrap();
        assert_eq!(doc.get(0).unwrap().fields(), &["a ", " b"]);
    }

    #[test]
    fn test_document_empty_source() {
        let err = Document::parse("\n  \n\t\n", ';').unwrap_err();
        assert!(matches!(err, RecmarkError::EmptySource(_)));

        let err = Document::parse("", ';').unwrap_err();
        assert!(matches!(err, RecmarkError::EmptySource(_)));
    }

    #[test]
    fn test_document_ragged_rows() {
        let doc = Document::parse("a;b;c\nd\ne;f", ';').unwrap();
        assert_eq!(doc.get(0).unwrap().len(), 3);
        assert_eq!(doc.get(1).unwrap().len(), 1);
    }

    #[test]
    fn test_document_custom_delimiter() {
        let doc = Document::parse("a,b;c", ',').unwrap();
        assert_eq!(doc.get(0).unwrap().fields(), &["a", "b;c"]);
    }

    #[test]
    fn test_tab_delimiter_keeps_edge_fields() {
        let doc = Document::parse("\tb\tc\t\n", '\t').unwrap();
        assert_eq!(doc.get(0).unwrap().fields(), &["", "b", "c", ""]);
    }

    #[test]
    fn test_space_delimiter_keeps_edge_fields() {
        let doc = Document::parse(" a b \r\n\t\n x\r\n", ' ').unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(0).unwrap().fields(), &["", "a", "b", ""]);
        assert_eq!(doc.get(1).unwrap().fields(), &["", "x"]);
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x61, 0x3b, 0xff, 0xfe, 0x0a];
        let err = Document::from_reader(bytes, ';').unwrap_err();
        assert!(matches!(err, RecmarkError::Read(_)));
    }

    #[test]
    fn test_record_from_iter() {
        let record: Record = ["x", "y"].into_iter().collect();
        assert_eq!(record.join(" | "), "x | y");
        assert_eq!(record.get(1), Some("y"));
        assert_eq!(record.get(2), None);
    }
}
