use anyhow::{Context, Result};
use csvguard_gen::{infer_schema, write_schema};
use std::path::Path;

use crate::output;

pub fn execute(csv_path: &str, output_path: Option<&str>, sample: usize) -> Result<()> {
    let schema = infer_schema(Path::new(csv_path), sample)
        .with_context(|| format!("Failed to infer schema from: {}", csv_path))?;

    match output_path {
        Some(path) => {
            write_schema(&schema, Path::new(path))
                .with_context(|| format!("Failed to write schema to: {}", path))?;
            output::print_success(&format!("Schema generated and saved to: {}", path));
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
