use anyhow::{Context, Result};
use csvguard_parser::load_file;
use csvguard_report::{ensure_output_dir, write_report};
use csvguard_validator::{RecordSet, Validator};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::output;

pub fn execute(csv_dir: &str, schema_path: &str, output_dir: &str) -> Result<()> {
    let schema = load_file(Path::new(schema_path))
        .with_context(|| format!("Failed to load schema file: {}", schema_path))?;

    let dir = Path::new(csv_dir);
    let mut csv_files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read CSV directory: {}", csv_dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    csv_files.sort();

    info!("Validating {} CSV file(s) in {}", csv_files.len(), csv_dir);

    let out_dir = Path::new(output_dir);
    ensure_output_dir(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // The schema is read-only after load; one validator serves every file.
    let mut validator = Validator::new();
    let mut results: Vec<(String, usize)> = Vec::with_capacity(csv_files.len());

    for file in &csv_files {
        let records = RecordSet::from_path(file)
            .with_context(|| format!("Failed to read CSV file: {}", file.display()))?;
        let findings = validator.validate(&records, &schema);

        let stem = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("file");
        let log_path = out_dir.join(format!("{}_validation.log", stem));
        write_report(&log_path, &findings)?;

        let name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_string();
        results.push((name, findings.len()));
    }

    output::print_batch_summary(&results);

    if results.iter().any(|(_, count)| *count > 0) {
        std::process::exit(1);
    }

    Ok(())
}
