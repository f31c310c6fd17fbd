//! Builder pattern for schema documents.
//!
//! This module provides an ergonomic builder for constructing column
//! definitions with a fluent API, used heavily in tests and by the schema
//! inference collaborator.

use crate::{ColumnSpec, ColumnType, ConstraintSet};

/// Builder for creating a `ColumnSpec`.
///
/// # Example
///
/// ```rust
/// use csvguard_core::ColumnBuilder;
///
/// let column = ColumnBuilder::new("age", "int").min(18.0).max(99.0).build();
/// assert_eq!(column.name, "age");
/// assert_eq!(column.constraints.min, Some(18.0));
/// ```
#[derive(Debug)]
pub struct ColumnBuilder {
    name: String,
    column_type: ColumnType,
    constraints: ConstraintSet,
}

impl ColumnBuilder {
    /// Creates a new column builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Column name
    /// * `column_type` - Declared type, as a `ColumnType` or its schema spelling
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            constraints: ConstraintSet::default(),
        }
    }

    /// Sets the inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }

    /// Sets the pattern constraint.
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.regex = Some(pattern.into());
        self
    }

    /// Sets the allowed-values constraint.
    pub fn allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the column definition.
    pub fn build(self) -> ColumnSpec {
        ColumnSpec {
            name: self.name,
            column_type: self.column_type,
            constraints: self.constraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let column = ColumnBuilder::new("id", "int").build();
        assert_eq!(column.name, "id");
        assert_eq!(column.column_type, ColumnType::Int);
        assert!(column.constraints.is_empty());
    }

    #[test]
    fn test_builder_constraints() {
        let column = ColumnBuilder::new("color", "str")
            .regex("^[a-z]+$")
            .allowed(["red", "blue"])
            .build();

        assert_eq!(column.constraints.regex.as_deref(), Some("^[a-z]+$"));
        assert_eq!(
            column.constraints.allowed,
            Some(vec!["red".to_string(), "blue".to_string()])
        );
    }

    #[test]
    fn test_builder_accepts_column_type() {
        let column = ColumnBuilder::new("score", ColumnType::Float).min(0.0).build();
        assert_eq!(column.column_type, ColumnType::Float);
        assert_eq!(column.constraints.min, Some(0.0));
        assert_eq!(column.constraints.max, None);
    }
}
