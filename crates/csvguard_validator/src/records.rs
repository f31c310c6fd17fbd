//! Record stream representation.
//!
//! This module reads tabular text into the in-memory form the engine
//! validates: the actual header sequence plus one `name -> raw value` map per
//! data row. The whole dataset is materialized up front; the design assumes
//! it fits addressable memory.

use crate::ValidateError;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single data row: field name mapped to its raw text value.
///
/// A name absent from the map means the row had no entry for that column;
/// the engine substitutes the empty string when evaluating it.
pub type Row = HashMap<String, String>;

/// A fully-read record stream.
#[derive(Debug, Clone)]
pub struct RecordSet {
    header: Option<Vec<String>>,
    rows: Vec<Row>,
}

impl RecordSet {
    /// Reads a record stream from a CSV file.
    ///
    /// Fails only on I/O-level problems (file unopenable, undecodable
    /// content); ragged rows are tolerated and handled by the engine.
    pub fn from_path(path: &Path) -> Result<Self, ValidateError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a record stream from any reader producing CSV text.
    ///
    /// The first record becomes the header; an input with no records at all
    /// yields a header of `None`. Rows are keyed by header name; values
    /// beyond the header width are dropped, and a row shorter than the
    /// header simply lacks entries for the trailing columns. When the header
    /// repeats a name, the rightmost column wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ValidateError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut header: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            match &header {
                None => {
                    header = Some(record.iter().map(str::to_string).collect());
                }
                Some(names) => {
                    let mut row = Row::with_capacity(names.len());
                    for (index, name) in names.iter().enumerate() {
                        if let Some(value) = record.get(index) {
                            row.insert(name.clone(), value.to_string());
                        }
                    }
                    rows.push(row);
                }
            }
        }

        Ok(Self { header, rows })
    }

    /// Creates a record set directly from a header and rows.
    pub fn from_rows(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            header: Some(header),
            rows,
        }
    }

    /// Creates an empty record set with no determinable header.
    pub fn empty() -> Self {
        Self {
            header: None,
            rows: Vec::new(),
        }
    }

    /// The actual header sequence; `None` when the input had no rows at all.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Returns an iterator over the data rows, in encounter order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Number of data rows (the header is not a data row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_has_no_header() {
        let records = RecordSet::from_reader("".as_bytes()).unwrap();
        assert_eq!(records.header(), None);
        assert!(records.is_empty());
    }

    #[test]
    fn test_header_only() {
        let records = RecordSet::from_reader("id,name\n".as_bytes()).unwrap();
        assert_eq!(
            records.header(),
            Some(&["id".to_string(), "name".to_string()][..])
        );
        assert_eq!(records.len(), 0);
    }

    #[test]
    fn test_rows_keyed_by_header() {
        let records = RecordSet::from_reader("id,name\n1,Alice\n2,Bob\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let rows: Vec<&Row> = records.rows().collect();
        assert_eq!(rows[0].get("id").unwrap(), "1");
        assert_eq!(rows[0].get("name").unwrap(), "Alice");
        assert_eq!(rows[1].get("name").unwrap(), "Bob");
    }

    #[test]
    fn test_short_row_lacks_trailing_entries() {
        let records = RecordSet::from_reader("id,name\n1\n".as_bytes()).unwrap();
        let rows: Vec<&Row> = records.rows().collect();
        assert_eq!(rows[0].get("id").unwrap(), "1");
        assert_eq!(rows[0].get("name"), None);
    }

    #[test]
    fn test_long_row_drops_extra_values() {
        let records = RecordSet::from_reader("id\n1,surplus\n".as_bytes()).unwrap();
        let rows: Vec<&Row> = records.rows().collect();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].get("id").unwrap(), "1");
    }

    #[test]
    fn test_quoted_empty_value_is_present_and_empty() {
        let records = RecordSet::from_reader("color\n\"\"\n".as_bytes()).unwrap();
        let rows: Vec<&Row> = records.rows().collect();
        assert_eq!(rows[0].get("color").unwrap(), "");
    }

    #[test]
    fn test_missing_file_is_a_hard_error() {
        let result = RecordSet::from_path(Path::new("no_such_file.csv"));
        assert!(matches!(result.unwrap_err(), ValidateError::Io(_)));
    }
}
