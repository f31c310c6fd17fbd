use colored::*;
use csvguard_core::Finding;
use serde_json::json;

pub fn print_findings(findings: &[Finding], format: &str) {
    match format {
        "json" => print_json_report(findings),
        _ => print_text_report(findings),
    }
}

fn print_text_report(findings: &[Finding]) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if findings.is_empty() {
        println!("\n{} {}", "✓".green().bold(), "CSV is valid".green().bold());
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            format!("Found {} error(s)", findings.len()).red().bold()
        );
        println!();
        for (i, finding) in findings.iter().enumerate() {
            println!("  {}. {}", i + 1, finding.to_string().red());
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_json_report(findings: &[Finding]) {
    let output = json!({
        "passed": findings.is_empty(),
        "findings": findings.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
        "summary": {
            "finding_count": findings.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_batch_summary(results: &[(String, usize)]) {
    println!("\n{}", "Validation Summary:".bold());
    for (name, count) in results {
        if *count == 0 {
            println!("- {}: {}", name, "✓ ok".green());
        } else {
            println!("- {}: {}", name, format!("✗ {} error(s)", count).red());
        }
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
