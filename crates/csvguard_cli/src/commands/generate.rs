use anyhow::{Context, Result};
use csvguard_gen::generate_csv;
use std::path::Path;

use crate::output;

pub fn execute(template: &str, output_path: &str, rows: usize) -> Result<()> {
    let mut rng = rand::thread_rng();
    generate_csv(Path::new(template), Path::new(output_path), rows, &mut rng)
        .with_context(|| format!("Failed to generate CSV from template: {}", template))?;

    output::print_success(&format!(
        "Generated CSV at: {} with {} row(s)",
        output_path, rows
    ));
    Ok(())
}
