//! # csvguard core
//!
//! Core data structures for the csvguard toolkit.
//!
//! This crate provides the schema document model consumed by the validation
//! engine, together with the [`Finding`] type that carries every reportable
//! validation message.
//!
//! ## Key Concepts
//!
//! - **SchemaDoc**: the ordered list of column definitions a dataset must conform to
//! - **ColumnSpec**: one column definition (name, declared type, optional constraints)
//! - **ConstraintSet**: independently applied rules (bounds, pattern, allowed values)
//! - **Finding**: one validation message tied to a row/field or to the header
//!
//! ## Example
//!
//! ```rust
//! use csvguard_core::{ColumnBuilder, SchemaDoc};
//!
//! let schema = SchemaDoc::new(vec![
//!     ColumnBuilder::new("id", "int").min(100.0).max(999.0).build(),
//!     ColumnBuilder::new("email", "str").regex(r"^[^@]+@[^@]+$").build(),
//! ]);
//! assert_eq!(schema.expected_header(), vec!["id", "email"]);
//! ```

pub mod builder;
pub mod finding;
pub mod schema;

pub use builder::*;
pub use finding::*;
pub use schema::*;
