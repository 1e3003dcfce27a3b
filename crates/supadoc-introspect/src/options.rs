/// Options that control how introspection behaves.
#[derive(Debug, Clone)]
pub struct IntrospectOptions {
    /// Fetch one sample row and the exact row count per table.
    pub include_sample_data: bool,
    /// Restrict the report to these tables (intersected with discovery).
    pub tables: Option<Vec<String>>,
}

impl Default for IntrospectOptions {
    fn default() -> Self {
        Self {
            include_sample_data: true,
            tables: None,
        }
    }
}
