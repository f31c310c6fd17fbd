//! Loader for csvguard schema documents (JSON/YAML formats).
//!
//! This module provides functionality to load schema documents from JSON and
//! YAML files into the strongly-typed `SchemaDoc` structure.
//!
//! Loading fails only when the underlying resource cannot be read or does not
//! decode as a well-formed document. Two shape problems are deliberately
//! *not* load failures: an unrecognized column `type` (it loads as
//! `ColumnType::Unknown` and disables the type check) and a missing `columns`
//! key (the validation engine reports it as a finding so batch callers get a
//! uniform result instead of a crash).
//!
//! # Example
//!
//! ```rust
//! use csvguard_parser::parse_json;
//!
//! let json = r#"
//! {
//!   "columns": [
//!     {"name": "id", "type": "int", "constraints": {"min": 1}},
//!     {"name": "email", "type": "str"}
//!   ]
//! }
//! "#;
//!
//! let schema = parse_json(json).expect("Failed to parse schema");
//! assert_eq!(schema.expected_header(), vec!["id", "email"]);
//! ```

use csvguard_core::SchemaDoc;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Supported schema file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
}

/// Parse a schema document from a JSON string.
pub fn parse_json(content: &str) -> Result<SchemaDoc> {
    let schema: SchemaDoc = serde_json::from_str(content)?;
    Ok(schema)
}

/// Parse a schema document from a YAML string.
///
/// # Example
///
/// ```rust
/// use csvguard_parser::parse_yaml;
///
/// let yaml = r#"
/// columns:
///   - name: id
///     type: int
/// "#;
///
/// let schema = parse_yaml(yaml).unwrap();
/// assert_eq!(schema.expected_header(), vec!["id"]);
/// ```
pub fn parse_yaml(content: &str) -> Result<SchemaDoc> {
    let schema: SchemaDoc = serde_yaml_ng::from_str(content)?;
    Ok(schema)
}

/// Detect the schema format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `SchemaFormat::Json`
/// * `.yaml`, `.yml` → `SchemaFormat::Yaml`
///
/// # Errors
///
/// Returns `SchemaError::InvalidExtension` if the file has no extension.
/// Returns `SchemaError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(SchemaError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(SchemaFormat::Json),
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        other => Err(SchemaError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a schema document from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use csvguard_parser::load_file;
/// use std::path::Path;
///
/// let schema = load_file(Path::new("schema_definition.json")).unwrap();
/// println!("Expecting columns: {:?}", schema.expected_header());
/// ```
pub fn load_file(path: &Path) -> Result<SchemaDoc> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        SchemaFormat::Json => parse_json(&content),
        SchemaFormat::Yaml => parse_yaml(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvguard_core::ColumnType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_json() {
        let json = r#"
        {
            "columns": [
                {"name": "id", "type": "int", "constraints": {"min": 100, "max": 999}},
                {"name": "name", "type": "str"}
            ]
        }"#;

        let schema = parse_json(json).expect("Failed to parse valid JSON");
        let columns = schema.columns.as_ref().unwrap();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "id");
        assert_eq!(columns[0].column_type, ColumnType::Int);
        assert_eq!(columns[0].constraints.min, Some(100.0));
        assert!(columns[1].constraints.is_empty());
    }

    #[test]
    fn test_parse_json_missing_columns_key_is_not_an_error() {
        let schema = parse_json(r#"{"version": 2}"#).unwrap();
        assert!(schema.columns.is_none());
    }

    #[test]
    fn test_parse_json_unknown_type_is_inert() {
        let schema = parse_json(r#"{"columns": [{"name": "ts", "type": "timestamp"}]}"#).unwrap();
        let columns = schema.columns.unwrap();
        assert_eq!(
            columns[0].column_type,
            ColumnType::Unknown("timestamp".to_string())
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_json("{not json");
        assert!(matches!(result.unwrap_err(), SchemaError::JsonError(_)));
    }

    #[test]
    fn test_parse_json_column_missing_name() {
        let result = parse_json(r#"{"columns": [{"type": "int"}]}"#);
        assert!(matches!(result.unwrap_err(), SchemaError::JsonError(_)));
    }

    #[test]
    fn test_parse_json_top_level_list_is_an_error() {
        let result = parse_json(r#"[{"name": "id", "type": "int"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_valid_yaml() {
        let yaml = r#"
columns:
  - name: color
    type: str
    constraints:
      enum: [red, blue, green]
"#;

        let schema = parse_yaml(yaml).expect("Failed to parse valid YAML");
        let columns = schema.columns.unwrap();
        assert_eq!(columns[0].name, "color");
        assert_eq!(
            columns[0].constraints.allowed,
            Some(vec![
                "red".to_string(),
                "blue".to_string(),
                "green".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_yaml("columns: [unclosed");
        assert!(matches!(result.unwrap_err(), SchemaError::YamlError(_)));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("schema.json")).unwrap(),
            SchemaFormat::Json
        );
        assert_eq!(
            detect_format(Path::new("schema.yaml")).unwrap(),
            SchemaFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("schema.yml")).unwrap(),
            SchemaFormat::Yaml
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("schema.toml"));
        assert!(matches!(
            result.unwrap_err(),
            SchemaError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("schema"));
        assert!(matches!(result.unwrap_err(), SchemaError::InvalidExtension));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, r#"{"columns": [{"name": "id", "type": "int"}]}"#).unwrap();

        let schema = load_file(&path).unwrap();
        assert_eq!(schema.expected_header(), vec!["id"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file(Path::new("does_not_exist.json"));
        assert!(matches!(result.unwrap_err(), SchemaError::IoError(_)));
    }
}
