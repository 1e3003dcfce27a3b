use async_trait::async_trait;

use supadoc_core::{Result, SchemaReport};

use crate::options::IntrospectOptions;

/// Trait implemented by endpoint adapters that can introspect schemas.
#[async_trait]
pub trait Adapter {
    /// Returns the endpoint-kind identifier (e.g. `supabase`).
    fn engine(&self) -> &'static str;

    /// Introspect the endpoint and return a report snapshot.
    async fn introspect(&self, opts: &IntrospectOptions) -> Result<SchemaReport>;
}
