//! # csvguard test-data collaborators
//!
//! Two helpers around the validation core:
//!
//! - [`generate`]: produce dummy CSV data from a template's header row, for
//!   exercising validation pipelines with plausible-looking values.
//! - [`infer`]: derive a heuristic schema document from a sample CSV. The
//!   result is a starting point, not a contract; hand-tune it before relying
//!   on it.

pub mod generate;
pub mod infer;

pub use generate::*;
pub use infer::*;

use thiserror::Error;

/// Errors that can occur during generation or inference.
#[derive(Debug, Error)]
pub enum GenError {
    /// Template or sample file could not be read/written
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding/decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Schema serialization failed
    #[error("Failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The input has no header row to work from
    #[error("CSV has no headers")]
    NoHeaders,
}

/// Result type alias for generation and inference operations.
pub type Result<T> = std::result::Result<T, GenError>;
