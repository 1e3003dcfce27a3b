use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use supadoc_core::{Error, Result};

use super::SupabaseAdapter;

/// Root document returned by the REST endpoint; only the path listing is
/// read.
#[derive(Debug, Deserialize)]
pub struct RawRoot {
    #[serde(default)]
    pub paths: BTreeMap<String, Value>,
}

/// Raw outcome of a successful sample probe.
#[derive(Debug)]
pub struct RawSample {
    pub rows: Vec<Value>,
    pub content_range: Option<String>,
}

/// Discovery: authenticated GET against the API root.
pub async fn fetch_root(adapter: &SupabaseAdapter) -> Result<RawRoot> {
    let url = format!("{}/rest/v1/", adapter.endpoint);
    let response = adapter
        .client
        .get(&url)
        .bearer_auth(&adapter.api_key)
        .send()
        .await
        .map_err(|err| Error::Http(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Discovery {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<RawRoot>()
        .await
        .map_err(|err| Error::Decode(err.to_string()))
}

/// Schema probe: zero rows, the table definition requested via the `Prefer`
/// header and read back from the `Content-Profile` response header.
///
/// Returns `Ok(None)` on a non-success status; an absent header on success
/// yields an empty definition.
pub async fn fetch_definition(adapter: &SupabaseAdapter, table: &str) -> Result<Option<String>> {
    let url = format!("{}/rest/v1/{}", adapter.endpoint, table);
    let response = adapter
        .client
        .get(&url)
        .query(&[("select", "*"), ("limit", "0")])
        .header("Prefer", "return=representation")
        .bearer_auth(&adapter.api_key)
        .send()
        .await
        .map_err(|err| Error::Http(err.to_string()))?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let definition = response
        .headers()
        .get("Content-Profile")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    Ok(Some(definition))
}

/// Sample probe: up to one row with an exact-count preference.
///
/// Returns `Ok(None)` on a non-success status.
pub async fn fetch_sample(adapter: &SupabaseAdapter, table: &str) -> Result<Option<RawSample>> {
    let url = format!("{}/rest/v1/{}", adapter.endpoint, table);
    let response = adapter
        .client
        .get(&url)
        .query(&[("select", "*"), ("limit", "1")])
        .header("Prefer", "count=exact")
        .bearer_auth(&adapter.api_key)
        .send()
        .await
        .map_err(|err| Error::Http(err.to_string()))?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let content_range = response
        .headers()
        .get("content-range")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let rows = response
        .json::<Vec<Value>>()
        .await
        .map_err(|err| Error::Decode(err.to_string()))?;

    Ok(Some(RawSample {
        rows,
        content_range,
    }))
}
