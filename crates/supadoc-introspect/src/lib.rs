//! Supabase REST introspection adapter.

pub mod adapter;
pub mod options;
pub mod supabase;

pub use adapter::Adapter;
pub use options::IntrospectOptions;
pub use supabase::{introspect_supabase, introspect_supabase_with_options, SupabaseAdapter};

pub use supadoc_core::SchemaReport;
