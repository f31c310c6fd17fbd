//! Dummy CSV generation.
//!
//! Reads the header row of a template CSV and writes a file with the same
//! header plus generated data rows. Values are shaped by the header name so
//! the output looks plausible to downstream consumers.

use crate::{GenError, Result};
use rand::Rng;
use std::fs::File;
use std::path::Path;
use tracing::info;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates one data row for the given headers.
///
/// Heuristics on the lowercased header name: `id` gets a 4-digit number,
/// `email` a synthetic address, `name` six random letters, `age` a value in
/// 18..=99; anything else is the literal `dummy`.
pub fn generate_row<R: Rng>(headers: &[String], rng: &mut R) -> Vec<String> {
    headers
        .iter()
        .map(|header| {
            let lower = header.to_lowercase();
            if lower.contains("id") {
                rng.gen_range(1000..=9999).to_string()
            } else if lower.contains("email") {
                format!("user{}@example.com", rng.gen_range(1..=100))
            } else if lower.contains("name") {
                (0..6)
                    .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                    .collect()
            } else if lower.contains("age") {
                rng.gen_range(18..=99).to_string()
            } else {
                "dummy".to_string()
            }
        })
        .collect()
}

/// Reads the header row of `template` and writes `rows` generated data rows
/// to `output`.
///
/// Fails when the template is unreadable or has no header row.
pub fn generate_csv<R: Rng>(
    template: &Path,
    output: &Path,
    rows: usize,
    rng: &mut R,
) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(File::open(template)?);

    let headers: Vec<String> = match reader.records().next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Err(GenError::NoHeaders),
    };

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(&headers)?;
    for _ in 0..rows {
        writer.write_record(generate_row(&headers, rng))?;
    }
    writer.flush()?;

    info!(
        "Generated CSV at {} with {} row(s)",
        output.display(),
        rows
    );
    Ok(())
}
