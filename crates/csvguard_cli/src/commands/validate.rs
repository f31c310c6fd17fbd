use anyhow::{Context, Result};
use chrono::Local;
use csvguard_parser::load_file;
use csvguard_report::{ensure_output_dir, log_file_name, render_html, render_markdown, write_report};
use csvguard_validator::{RecordSet, Validator};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    csv_path: &str,
    schema_path: &str,
    output_dir: &str,
    markdown: bool,
    html: bool,
    format: &str,
) -> Result<()> {
    info!("Validating '{}' using schema '{}'", csv_path, schema_path);

    let schema = load_file(Path::new(schema_path))
        .with_context(|| format!("Failed to load schema file: {}", schema_path))?;

    let records = RecordSet::from_path(Path::new(csv_path))
        .with_context(|| format!("Failed to read CSV file: {}", csv_path))?;

    let findings = Validator::new().validate(&records, &schema);

    // Write the timestamped log, creating the output directory only now.
    let out_dir = Path::new(output_dir);
    ensure_output_dir(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;
    let log_path = out_dir.join(log_file_name(Local::now()));
    write_report(&log_path, &findings)?;
    output::print_info(&format!("Report written to: {}", log_path.display()));

    if markdown {
        let md_path = log_path.with_extension("md");
        std::fs::write(&md_path, render_markdown(&findings))
            .with_context(|| format!("Failed to write Markdown report: {}", md_path.display()))?;
        output::print_info(&format!("Markdown report saved to: {}", md_path.display()));
    }

    if html {
        let html_path = log_path.with_extension("html");
        std::fs::write(&html_path, render_html(&findings))
            .with_context(|| format!("Failed to write HTML report: {}", html_path.display()))?;
        output::print_info(&format!("HTML report saved to: {}", html_path.display()));
    }

    output::print_findings(&findings, format);

    if !findings.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
