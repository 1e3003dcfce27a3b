//! Core contracts and helpers for Supadoc.
//!
//! This crate defines the canonical report types, the column-definition
//! parser, and the markdown renderer shared across the adapter and the CLI.

pub mod definition;
pub mod error;
pub mod render;
pub mod schema;

pub use definition::{parse_table_definition, sort_columns};
pub use error::{Error, Result};
pub use render::render_report;
pub use schema::{Column, SampleData, SchemaReport, TableReport};

/// Current report contract version for serialized `SchemaReport` artifacts.
pub const REPORT_VERSION: &str = "0.1";
