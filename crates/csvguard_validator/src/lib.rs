//! # csvguard validation engine
//!
//! Validation engine for tabular records. This crate provides the core logic
//! for checking CSV data against a schema document, including:
//!
//! - Header reconciliation (missing / unexpected columns)
//! - Per-field type conformance (`int`, `float`, `str`)
//! - Constraint evaluation (numeric bounds, patterns, allowed values)
//!
//! Every data-shape problem is reported as a [`csvguard_core::Finding`] in a
//! single deterministic, ordered list; the only hard errors are I/O-level
//! failures while reading the record source.
//!
//! ## Example
//!
//! ```rust
//! use csvguard_core::{ColumnBuilder, SchemaDoc};
//! use csvguard_validator::{RecordSet, Validator};
//!
//! let schema = SchemaDoc::new(vec![
//!     ColumnBuilder::new("id", "int").min(100.0).max(999.0).build(),
//! ]);
//! let records = RecordSet::from_reader("id\n50\n".as_bytes()).unwrap();
//!
//! let findings = Validator::new().validate(&records, &schema);
//! assert_eq!(findings[0].to_string(), "Row 1: Field 'id' below min 100");
//! ```

mod constraints;
mod engine;
mod error;
mod fields;
mod header;
mod records;

pub use constraints::*;
pub use engine::*;
pub use error::*;
pub use records::*;
