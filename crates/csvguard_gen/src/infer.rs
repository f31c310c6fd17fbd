//! Heuristic schema inference.
//!
//! Derives a schema document from a sample of a CSV file. The cascade is
//! deliberately conservative: a column is only `int` when every non-blank
//! sample is an integer, only `float` when every sample is numeric, and
//! email-looking columns come out as `str` with a pattern constraint so the
//! inferred document is immediately usable by the validation engine.

use crate::{GenError, Result};
use csvguard_core::{ColumnBuilder, SchemaDoc};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Pattern attached to columns whose samples all look like addresses.
pub const EMAIL_REGEX: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Infers a schema document from up to `sample_size` data rows of `csv_path`.
///
/// Blank values are ignored while classifying; a column with no non-blank
/// samples infers as `str`. Fails when the file is unreadable or has no
/// header row.
pub fn infer_schema(csv_path: &Path, sample_size: usize) -> Result<SchemaDoc> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(csv_path)?);

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Err(GenError::NoHeaders),
    };
    if headers.is_empty() {
        return Err(GenError::NoHeaders);
    }

    let mut samples: Vec<csv::StringRecord> = Vec::with_capacity(sample_size);
    for record in records.take(sample_size) {
        samples.push(record?);
    }

    let columns = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let values: Vec<&str> = samples
                .iter()
                .filter_map(|record| record.get(index))
                .filter(|value| !value.trim().is_empty())
                .collect();
            infer_column(header, &values)
        })
        .collect();

    info!(
        "Inferred schema for {} column(s) from {} sampled row(s)",
        headers.len(),
        samples.len()
    );
    Ok(SchemaDoc::new(columns))
}

/// Writes a schema document as pretty-printed JSON.
pub fn write_schema(schema: &SchemaDoc, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(schema)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn infer_column(name: &str, values: &[&str]) -> csvguard_core::ColumnSpec {
    if values.is_empty() {
        return ColumnBuilder::new(name, "str").build();
    }

    if values.iter().all(|v| v.trim().parse::<i64>().is_ok()) {
        ColumnBuilder::new(name, "int").build()
    } else if values.iter().all(|v| v.trim().parse::<f64>().is_ok()) {
        ColumnBuilder::new(name, "float").build()
    } else if values.iter().all(|v| v.contains('@')) {
        ColumnBuilder::new(name, "str").regex(EMAIL_REGEX).build()
    } else {
        ColumnBuilder::new(name, "str").build()
    }
}
