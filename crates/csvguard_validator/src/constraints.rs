//! Constraint evaluation.
//!
//! Second stage of per-field evaluation: numeric bounds, pattern matching,
//! and allowed-value membership. All applicable rules run independently; a
//! field can violate several at once.

use csvguard_core::{ColumnSpec, ColumnType, Finding};
use regex::Regex;
use std::collections::HashMap;
use tracing::warn;

/// Evaluates the constraint set of a column against one field value.
pub struct ConstraintChecker {
    /// Cache of compiled patterns; a failed compile is cached as `None`
    regex_cache: HashMap<String, Option<Regex>>,
}

impl ConstraintChecker {
    /// Creates a new constraint checker.
    pub fn new() -> Self {
        Self {
            regex_cache: HashMap::new(),
        }
    }

    /// Runs every applicable rule for one field.
    ///
    /// Numeric bounds require a successful `f64` coercion of the raw value;
    /// on coercion failure they are skipped without a finding (the `int`
    /// type check has already reported the value, and `float` columns carry
    /// no type signal at all). Bounds are inclusive. The pattern rule
    /// applies to `str` columns only and matches at the start of the raw
    /// value; the allowed-set rule applies to the raw value regardless of
    /// declared type.
    pub fn check(
        &mut self,
        value: &str,
        column: &ColumnSpec,
        row: usize,
        findings: &mut Vec<Finding>,
    ) {
        let rules = &column.constraints;

        if column.column_type.is_numeric() {
            if let Ok(numeric) = value.trim().parse::<f64>() {
                if let Some(min) = rules.min {
                    if numeric < min {
                        findings.push(Finding::BelowMin {
                            row,
                            field: column.name.clone(),
                            min,
                        });
                    }
                }
                if let Some(max) = rules.max {
                    if numeric > max {
                        findings.push(Finding::AboveMax {
                            row,
                            field: column.name.clone(),
                            max,
                        });
                    }
                }
            }
        }

        if column.column_type == ColumnType::Str {
            if let Some(pattern) = &rules.regex {
                if let Some(regex) = self.compiled(pattern) {
                    if !matches_at_start(regex, value) {
                        findings.push(Finding::PatternMismatch {
                            row,
                            field: column.name.clone(),
                        });
                    }
                }
            }
        }

        if let Some(allowed) = &rules.allowed {
            if !allowed.iter().any(|candidate| candidate == value) {
                findings.push(Finding::NotInEnum {
                    row,
                    field: column.name.clone(),
                    allowed: allowed.clone(),
                });
            }
        }
    }

    /// Gets a compiled regex from cache, compiling it on first use.
    ///
    /// A pattern that fails to compile is skipped for the rest of the run;
    /// the finding vocabulary has no slot for schema-side pattern defects.
    fn compiled(&mut self, pattern: &str) -> Option<&Regex> {
        self.regex_cache
            .entry(pattern.to_string())
            .or_insert_with(|| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    warn!("Skipping unparseable regex constraint '{}': {}", pattern, err);
                    None
                }
            })
            .as_ref()
    }
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix-match semantics: the pattern must match starting at the first
/// byte, but need not consume the whole value unless it anchors the end.
fn matches_at_start(regex: &Regex, value: &str) -> bool {
    regex
        .find(value)
        .is_some_and(|found| found.start() == 0)
}
