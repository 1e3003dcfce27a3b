use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use supadoc_core::{
    parse_table_definition, sort_columns, Error, Result, SampleData, SchemaReport, TableReport,
    REPORT_VERSION,
};

use crate::adapter::Adapter;
use crate::options::IntrospectOptions;

mod mapper;
mod requests;

/// Adapter for Supabase PostgREST endpoints.
#[derive(Clone)]
pub struct SupabaseAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseAdapter {
    /// Create a new adapter for the given project endpoint and anon key.
    ///
    /// Every request carries the key as both the `apikey` header and a
    /// bearer token.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&api_key)
                .map_err(|err| Error::Config(format!("invalid api key: {err}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| Error::Http(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Base URL of the introspected project.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Adapter for SupabaseAdapter {
    fn engine(&self) -> &'static str {
        "supabase"
    }

    async fn introspect(&self, opts: &IntrospectOptions) -> Result<SchemaReport> {
        introspect(self, opts).await
    }
}

/// Introspect Supabase with default options.
pub async fn introspect_supabase(adapter: &SupabaseAdapter) -> Result<SchemaReport> {
    introspect_supabase_with_options(adapter, IntrospectOptions::default()).await
}

/// Introspect Supabase with caller-provided options.
pub async fn introspect_supabase_with_options(
    adapter: &SupabaseAdapter,
    opts: IntrospectOptions,
) -> Result<SchemaReport> {
    introspect(adapter, &opts).await
}

/// Introspect a Supabase endpoint according to the provided options.
///
/// Discovery failure aborts the run; every per-table failure degrades to an
/// empty column list or a sample placeholder and the remaining tables are
/// still processed.
pub async fn introspect(
    adapter: &SupabaseAdapter,
    opts: &IntrospectOptions,
) -> Result<SchemaReport> {
    let root = requests::fetch_root(adapter).await?;
    let names = mapper::filter_tables(root, opts);

    let mut tables = Vec::new();
    for name in names {
        tracing::info!("processing table: {name}");
        tables.push(probe_table(adapter, &name, opts).await);
    }

    Ok(SchemaReport {
        report_version: REPORT_VERSION.to_string(),
        endpoint: adapter.endpoint.clone(),
        tables,
    })
}

async fn probe_table(
    adapter: &SupabaseAdapter,
    name: &str,
    opts: &IntrospectOptions,
) -> TableReport {
    let mut columns = match requests::fetch_definition(adapter, name).await {
        Ok(Some(definition)) => parse_table_definition(&definition),
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!("schema probe failed for {name}: {err}");
            Vec::new()
        }
    };
    sort_columns(&mut columns);

    let sample = if opts.include_sample_data {
        match requests::fetch_sample(adapter, name).await {
            Ok(Some(raw)) => SampleData::Collected {
                total_rows: mapper::parse_content_range(raw.content_range.as_deref()),
                row: raw.rows.into_iter().next(),
            },
            Ok(None) => SampleData::Unavailable,
            Err(err) => {
                tracing::warn!("error getting data for {name}: {err}");
                SampleData::Failed
            }
        }
    } else {
        SampleData::Skipped
    };

    TableReport {
        name: name.to_string(),
        columns,
        sample,
    }
}
