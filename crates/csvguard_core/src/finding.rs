//! Validation findings.
//!
//! A [`Finding`] is one human-readable validation message tied to a data row
//! and field, or to the header. Findings are accumulated in emission order
//! and never deduplicated: every independent rule violation is reported.

use crate::ColumnType;
use thiserror::Error;

/// One reportable validation message.
///
/// The `Display` implementation renders the exact report line for each kind
/// of violation; callers that need structure (row number, field name) can use
/// the accessors instead of parsing the text back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Finding {
    /// Actual and expected header sequences differ, or the header could not
    /// be determined at all (empty input).
    #[error("Header mismatch: {} vs {}", fmt_header(.actual), fmt_list(.expected))]
    HeaderMismatch {
        actual: Option<Vec<String>>,
        expected: Vec<String>,
    },

    /// An expected column is absent from the actual header.
    #[error("Missing field '{field}'")]
    MissingField { field: String },

    /// The actual header names a column the schema does not expect.
    #[error("Unexpected extra field '{field}'")]
    UnexpectedField { field: String },

    /// A `str` field holds an empty or all-whitespace value.
    #[error("Row {row}: Field '{field}' is an empty string")]
    EmptyString { row: usize, field: String },

    /// The raw value does not conform to the declared type.
    #[error("Row {row}: Field '{field}' expected {expected} but got '{value}'")]
    TypeMismatch {
        row: usize,
        field: String,
        expected: ColumnType,
        value: String,
    },

    /// A numeric value fell below the configured lower bound.
    #[error("Row {row}: Field '{field}' below min {min}")]
    BelowMin { row: usize, field: String, min: f64 },

    /// A numeric value exceeded the configured upper bound.
    #[error("Row {row}: Field '{field}' above max {max}")]
    AboveMax { row: usize, field: String, max: f64 },

    /// A `str` value does not match the configured pattern at its start.
    #[error("Row {row}: Field '{field}' does not match pattern")]
    PatternMismatch { row: usize, field: String },

    /// The raw value is not a member of the allowed set.
    #[error("Row {row}: Field '{field}' not in allowed values: {}", fmt_list(.allowed))]
    NotInEnum {
        row: usize,
        field: String,
        allowed: Vec<String>,
    },

    /// The schema document loaded but carries no column list.
    #[error("Schema is missing 'columns' key.")]
    MissingColumnsKey,
}

impl Finding {
    /// 1-indexed data row this finding is tied to; `None` for header-level
    /// and schema-level findings.
    pub fn row(&self) -> Option<usize> {
        match self {
            Finding::EmptyString { row, .. }
            | Finding::TypeMismatch { row, .. }
            | Finding::BelowMin { row, .. }
            | Finding::AboveMax { row, .. }
            | Finding::PatternMismatch { row, .. }
            | Finding::NotInEnum { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Field name the finding is tied to, when it has one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Finding::MissingField { field }
            | Finding::UnexpectedField { field }
            | Finding::EmptyString { field, .. }
            | Finding::TypeMismatch { field, .. }
            | Finding::BelowMin { field, .. }
            | Finding::AboveMax { field, .. }
            | Finding::PatternMismatch { field, .. }
            | Finding::NotInEnum { field, .. } => Some(field),
            Finding::HeaderMismatch { .. } | Finding::MissingColumnsKey => None,
        }
    }
}

fn fmt_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn fmt_header(header: &Option<Vec<String>>) -> String {
    match header {
        Some(names) => fmt_list(names),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_mismatch_message() {
        let finding = Finding::HeaderMismatch {
            actual: Some(vec!["id".to_string(), "name".to_string()]),
            expected: vec!["id".to_string(), "email".to_string()],
        };
        assert_eq!(
            finding.to_string(),
            "Header mismatch: [id, name] vs [id, email]"
        );
    }

    #[test]
    fn test_header_mismatch_without_actual_header() {
        let finding = Finding::HeaderMismatch {
            actual: None,
            expected: vec!["id".to_string()],
        };
        assert_eq!(finding.to_string(), "Header mismatch: none vs [id]");
    }

    #[test]
    fn test_row_level_messages() {
        let cases = [
            (
                Finding::EmptyString {
                    row: 3,
                    field: "name".to_string(),
                },
                "Row 3: Field 'name' is an empty string",
            ),
            (
                Finding::TypeMismatch {
                    row: 2,
                    field: "age".to_string(),
                    expected: ColumnType::Int,
                    value: "abc".to_string(),
                },
                "Row 2: Field 'age' expected int but got 'abc'",
            ),
            (
                Finding::BelowMin {
                    row: 1,
                    field: "id".to_string(),
                    min: 100.0,
                },
                "Row 1: Field 'id' below min 100",
            ),
            (
                Finding::AboveMax {
                    row: 1,
                    field: "score".to_string(),
                    max: 0.5,
                },
                "Row 1: Field 'score' above max 0.5",
            ),
            (
                Finding::PatternMismatch {
                    row: 4,
                    field: "email".to_string(),
                },
                "Row 4: Field 'email' does not match pattern",
            ),
            (
                Finding::NotInEnum {
                    row: 5,
                    field: "color".to_string(),
                    allowed: vec!["red".to_string(), "blue".to_string()],
                },
                "Row 5: Field 'color' not in allowed values: [red, blue]",
            ),
        ];

        for (finding, expected) in cases {
            assert_eq!(finding.to_string(), expected);
        }
    }

    #[test]
    fn test_schema_level_message() {
        assert_eq!(
            Finding::MissingColumnsKey.to_string(),
            "Schema is missing 'columns' key."
        );
    }

    #[test]
    fn test_row_accessor() {
        let finding = Finding::EmptyString {
            row: 7,
            field: "name".to_string(),
        };
        assert_eq!(finding.row(), Some(7));
        assert_eq!(finding.field(), Some("name"));
        assert_eq!(Finding::MissingColumnsKey.row(), None);

        let header = Finding::MissingField {
            field: "email".to_string(),
        };
        assert_eq!(header.row(), None);
        assert_eq!(header.field(), Some("email"));
    }
}
