mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "csvguard")]
#[command(version, about = "CSV schema validation toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV file against a schema document
    Validate {
        /// Path to the CSV file to validate
        csv: String,

        /// Path to the schema file (JSON or YAML)
        #[arg(short, long, default_value = "schema_definition.json")]
        schema: String,

        /// Directory to save the validation log
        #[arg(short, long, default_value = "reports/validation_logs")]
        output: String,

        /// Also write a Markdown (.md) version of the report
        #[arg(long)]
        markdown: bool,

        /// Also write an HTML (.html) version of the report
        #[arg(long)]
        html: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate every CSV file in a directory against one schema
    Batch {
        /// Directory containing CSV files to validate
        csv_dir: String,

        /// Path to the schema file (JSON or YAML)
        #[arg(short, long, default_value = "schema_definition.json")]
        schema: String,

        /// Directory to save validation logs
        #[arg(short, long, default_value = "reports/validation_logs")]
        output: String,
    },

    /// Generate dummy CSV data from a template file with headers
    Generate {
        /// Path to the CSV template with headers
        template: String,

        /// Output path for the generated CSV
        output: String,

        /// Number of rows to generate
        #[arg(short, long, default_value_t = 10)]
        rows: usize,
    },

    /// Infer a schema document from an existing CSV file
    Init {
        /// Path to the CSV file to infer the schema from
        csv: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Number of rows to sample
        #[arg(long, default_value_t = 10)]
        sample: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            csv,
            schema,
            output,
            markdown,
            html,
            format,
        } => commands::validate::execute(&csv, &schema, &output, markdown, html, &format),

        Commands::Batch {
            csv_dir,
            schema,
            output,
        } => commands::batch::execute(&csv_dir, &schema, &output),

        Commands::Generate {
            template,
            output,
            rows,
        } => commands::generate::execute(&template, &output, rows),

        Commands::Init {
            csv,
            output,
            sample,
        } => commands::init::execute(&csv, output.as_deref(), sample),
    }
}
