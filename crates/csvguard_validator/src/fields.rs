//! Field-type checks.
//!
//! First stage of per-field evaluation: empty-string detection for `str`
//! columns and format checks for `int` columns. `float` has no dedicated
//! format check here; constraint evaluation performs the numeric coercion.

use csvguard_core::{ColumnSpec, ColumnType, Finding};

/// Runs the type/empty check for one field.
///
/// Returns `false` when constraint evaluation must be skipped for this
/// field in this row: an `int` value that is not composed entirely of
/// decimal digits produces a `TypeMismatch` and suppresses every further
/// check on the field.
pub(crate) fn check(
    value: &str,
    column: &ColumnSpec,
    row: usize,
    findings: &mut Vec<Finding>,
) -> bool {
    match &column.column_type {
        ColumnType::Str => {
            if value.trim().is_empty() {
                findings.push(Finding::EmptyString {
                    row,
                    field: column.name.clone(),
                });
            }
            true
        }
        ColumnType::Int => {
            if is_decimal(value) {
                true
            } else {
                findings.push(Finding::TypeMismatch {
                    row,
                    field: column.name.clone(),
                    expected: ColumnType::Int,
                    value: value.to_string(),
                });
                false
            }
        }
        ColumnType::Float | ColumnType::Unknown(_) => true,
    }
}

/// An `int` value must be a non-empty run of decimal digits; signs,
/// separators, and whitespace all fail the check.
fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvguard_core::ColumnBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_str_empty_value() {
        let column = ColumnBuilder::new("name", "str").build();
        let mut findings = Vec::new();

        assert!(check("", &column, 1, &mut findings));
        assert!(check("   ", &column, 2, &mut findings));

        assert_eq!(
            findings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec![
                "Row 1: Field 'name' is an empty string",
                "Row 2: Field 'name' is an empty string",
            ]
        );
    }

    #[test]
    fn test_str_non_empty_value() {
        let column = ColumnBuilder::new("name", "str").build();
        let mut findings = Vec::new();
        assert!(check("Alice", &column, 1, &mut findings));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_int_rejects_non_digits() {
        let column = ColumnBuilder::new("age", "int").build();
        let mut findings = Vec::new();

        for value in ["abc", "", "4.5", "-3", " 7"] {
            assert!(!check(value, &column, 1, &mut findings));
        }
        assert_eq!(findings.len(), 5);
        assert_eq!(
            findings[0].to_string(),
            "Row 1: Field 'age' expected int but got 'abc'"
        );
    }

    #[test]
    fn test_int_accepts_digit_runs() {
        let column = ColumnBuilder::new("age", "int").build();
        let mut findings = Vec::new();
        assert!(check("42", &column, 1, &mut findings));
        assert!(check("007", &column, 1, &mut findings));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_float_and_unknown_have_no_type_check() {
        let float_column = ColumnBuilder::new("score", "float").build();
        let unknown_column = ColumnBuilder::new("ts", "timestamp").build();
        let mut findings = Vec::new();

        assert!(check("not-a-number", &float_column, 1, &mut findings));
        assert!(check("", &unknown_column, 1, &mut findings));
        assert!(findings.is_empty());
    }
}
