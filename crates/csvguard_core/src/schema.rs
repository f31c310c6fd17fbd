//! Schema document types.
//!
//! This module contains the types describing a validation schema: the ordered
//! column list, per-column declared types, and optional constraint sets.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A schema document against which tabular records are validated.
///
/// The column order defines the expected header sequence. A document whose
/// `columns` key is absent (or null) still loads; the validation engine
/// reports it as a single finding rather than failing the load.
///
/// # Example
///
/// ```rust
/// use csvguard_core::{ColumnSpec, ColumnType, ConstraintSet, SchemaDoc};
///
/// let schema = SchemaDoc::new(vec![ColumnSpec {
///     name: "id".to_string(),
///     column_type: ColumnType::Int,
///     constraints: ConstraintSet::default(),
/// }]);
/// assert_eq!(schema.expected_header(), vec!["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDoc {
    /// Ordered column definitions; `None` when the document has no column list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnSpec>>,
}

impl SchemaDoc {
    /// Creates a document from an ordered column list.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns: Some(columns),
        }
    }

    /// The expected header sequence, in schema order.
    ///
    /// Empty when the document has no column list.
    pub fn expected_header(&self) -> Vec<String> {
        self.columns
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|column| column.name.clone())
            .collect()
    }
}

/// A single column definition in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name; expected to be unique within the schema
    pub name: String,

    /// Declared column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Optional validation constraints, empty by default
    #[serde(default, skip_serializing_if = "ConstraintSet::is_empty")]
    pub constraints: ConstraintSet,
}

/// Declared type of a column.
///
/// The schema format keeps the type as an open string. Anything outside the
/// known kinds loads as `Unknown`, which disables the type check for that
/// column without failing the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Decimal-digit integer
    Int,
    /// Floating point number
    Float,
    /// Free-form text
    Str,
    /// Unrecognized declaration, kept verbatim; no type check fires
    Unknown(String),
}

impl ColumnType {
    /// Returns true for the kinds that take part in numeric bound checks.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }

    /// The schema-format spelling of this type.
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Str => "str",
            ColumnType::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for ColumnType {
    fn from(raw: &str) -> Self {
        match raw {
            "int" => ColumnType::Int,
            "float" => ColumnType::Float,
            "str" => ColumnType::Str,
            other => ColumnType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ColumnType {
    fn from(raw: String) -> Self {
        ColumnType::from(raw.as_str())
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ColumnType::from(raw))
    }
}

/// Optional, independently applied rules attached to a column.
///
/// Rules compose additively: every applicable rule is evaluated for a field,
/// none short-circuits another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Inclusive numeric lower bound; meaningful for `int`/`float` columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Inclusive numeric upper bound; meaningful for `int`/`float` columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Pattern matched at the start of the raw value; applied to `str` columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Closed set of permitted literal values, applied regardless of type
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl ConstraintSet {
    /// Returns true when no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.regex.is_none() && self.allowed.is_none()
    }
}
