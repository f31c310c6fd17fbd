//! Validation report rendering.
//!
//! Turns an ordered finding list into written artifacts: a plain-text log
//! file, a Markdown document, and a minimal HTML page. The output directory
//! is created explicitly and only immediately before writing; nothing here
//! runs at load time, and nothing here decides process exit codes.

use chrono::{DateTime, Local};
use csvguard_core::Finding;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report file or directory could not be written
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Creates the output directory (and parents) if it does not exist.
///
/// Callers invoke this right before writing, never earlier.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Timestamped log file name for a validation run.
///
/// ```rust
/// use chrono::{Local, TimeZone};
/// use csvguard_report::log_file_name;
///
/// let at = Local.with_ymd_and_hms(2025, 7, 1, 14, 30, 0).unwrap();
/// assert_eq!(log_file_name(at), "validation_2025-07-01_1430.log");
/// ```
pub fn log_file_name(at: DateTime<Local>) -> String {
    format!("validation_{}.log", at.format("%Y-%m-%d_%H%M"))
}

/// Writes the plain-text validation log to `output_file`.
///
/// One finding per line under a fixed banner; an empty list writes
/// `No issues found.`
pub fn write_report(output_file: &Path, findings: &[Finding]) -> Result<()> {
    let mut content = String::from("Validation Report\n");
    content.push_str(&"=".repeat(40));
    content.push_str("\n\n");

    if findings.is_empty() {
        content.push_str("No issues found.\n");
    } else {
        for finding in findings {
            content.push_str(&finding.to_string());
            content.push('\n');
        }
    }

    std::fs::write(output_file, content)?;
    info!("Report written to {}", output_file.display());
    Ok(())
}

/// Renders the finding list as a Markdown document.
pub fn render_markdown(findings: &[Finding]) -> String {
    let mut md = String::from("# Validation Report\n\n");
    if findings.is_empty() {
        md.push_str("No errors found.\n");
    } else {
        md.push_str("## Errors:\n");
        for finding in findings {
            md.push_str(&format!("- {}\n", finding));
        }
    }
    md
}

/// Renders the finding list as a minimal standalone HTML page.
///
/// The body is the Markdown rendering with headings and line breaks mapped
/// to tags; good enough for a browser glance, not a full converter.
pub fn render_html(findings: &[Finding]) -> String {
    let body = render_markdown(findings)
        .replace("## ", "<h2>")
        .replace("# ", "<h1>")
        .replace('\n', "<br>");

    format!(
        "<html><head><title>Validation Report</title></head><body>\n{}\n</body></html>",
        body
    )
}
