//! Error types for validation operations.
//!
//! These cover the hard-failure tier only: problems opening or decoding the
//! record source. Data-shape problems never surface here; they are collected
//! as findings.

use thiserror::Error;

/// Hard errors that abort a validation call.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Record source could not be opened or read
    #[error("Failed to read record source: {0}")]
    Io(#[from] std::io::Error),

    /// Record source could not be decoded as CSV
    #[error("Failed to decode record source: {0}")]
    Csv(#[from] csv::Error),
}
