//! Main validation engine.
//!
//! Orchestrates one linear pass over a record stream: header reconciliation
//! once, then per-row, per-column field and constraint checks, accumulating
//! findings into a single ordered list.

use crate::{ConstraintChecker, RecordSet, fields, header};
use csvguard_core::{Finding, SchemaDoc};
use tracing::debug;

/// Schema-driven validation engine.
///
/// The engine is synchronous and holds no state beyond a compiled-regex
/// cache; calling [`Validator::validate`] twice with identical inputs yields
/// identical, identically-ordered output.
///
/// # Example
///
/// ```rust
/// use csvguard_core::{ColumnBuilder, SchemaDoc};
/// use csvguard_validator::{RecordSet, Validator};
///
/// let schema = SchemaDoc::new(vec![ColumnBuilder::new("name", "str").build()]);
/// let records = RecordSet::from_reader("name\nAlice\n".as_bytes()).unwrap();
///
/// let findings = Validator::new().validate(&records, &schema);
/// assert!(findings.is_empty());
/// ```
pub struct Validator {
    constraints: ConstraintChecker,
}

impl Validator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self {
            constraints: ConstraintChecker::new(),
        }
    }

    /// Validates a record stream against a schema document.
    ///
    /// Returns every data-shape problem as an ordered list of findings; an
    /// empty list is an unambiguous "valid" result. Malformed data never
    /// raises; hard errors belong to record-source construction, not here.
    ///
    /// Emission order: the schema-structure check, then header findings,
    /// then row findings (rows in encounter order, columns in schema order,
    /// and within one field: type/empty check before constraint checks).
    pub fn validate(&mut self, records: &RecordSet, schema: &SchemaDoc) -> Vec<Finding> {
        let mut findings = Vec::new();

        let Some(columns) = schema.columns.as_deref() else {
            findings.push(Finding::MissingColumnsKey);
            return findings;
        };

        let expected = schema.expected_header();
        findings.extend(header::reconcile(records.header(), &expected));

        for (index, row) in records.rows().enumerate() {
            let row_number = index + 1;
            for column in columns {
                let value = row.get(&column.name).map(String::as_str).unwrap_or("");

                if fields::check(value, column, row_number, &mut findings) {
                    self.constraints
                        .check(value, column, row_number, &mut findings);
                }
            }
        }

        debug!(
            "Validated {} row(s) against {} column(s): {} finding(s)",
            records.len(),
            columns.len(),
            findings.len()
        );

        findings
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
