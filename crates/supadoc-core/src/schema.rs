use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level report snapshot for a Supabase project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaReport {
    /// Contract version for this report format.
    pub report_version: String,
    /// Base URL of the introspected project. Never contains the key.
    pub endpoint: String,
    /// Tables discovered under the REST root, alphabetical by name.
    pub tables: Vec<TableReport>,
}

/// Snapshot of a single table: parsed columns plus the sample-probe outcome.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableReport {
    pub name: String,
    /// Columns sorted primary-key-first, then by name.
    pub columns: Vec<Column>,
    pub sample: SampleData,
}

/// Column metadata parsed from a table definition header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    /// Second token of the definition line, taken verbatim.
    pub data_type: String,
    pub is_nullable: bool,
    pub is_primary: bool,
    pub default: Option<String>,
}

/// Outcome of the sample-data probe for one table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SampleData {
    /// The probe answered 200.
    Collected {
        /// First row of the response body, when the table has data.
        row: Option<Value>,
        /// Total from the `content-range` header, when numeric.
        total_rows: Option<u64>,
    },
    /// The probe answered with a non-success status.
    Unavailable,
    /// The probe failed outright (transport or decode error).
    Failed,
    /// The probe was disabled by options.
    Skipped,
}
