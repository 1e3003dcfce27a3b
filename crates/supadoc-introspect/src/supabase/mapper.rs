use std::collections::BTreeSet;

use crate::options::IntrospectOptions;

use super::requests::RawRoot;

/// Endpoint roots that never name a table.
const EXCLUDED_ROOTS: &[&str] = &["rpc", "graphql", ""];

/// Reduce the discovery document to table names: first path segment,
/// de-duplicated, non-table roots dropped, sorted ascending.
pub fn filter_tables(raw: RawRoot, opts: &IntrospectOptions) -> Vec<String> {
    let mut names: BTreeSet<String> = raw
        .paths
        .keys()
        .filter_map(|path| path.trim_matches('/').split('/').next())
        .filter(|segment| !EXCLUDED_ROOTS.contains(segment))
        .map(str::to_string)
        .collect();

    if let Some(allowed) = &opts.tables {
        names.retain(|name| allowed.iter().any(|item| item == name));
    }

    names.into_iter().collect()
}

/// Extract the total from a `content-range` header (`start-end/total`).
///
/// Returns `None` when the header is absent or the total is `*` or otherwise
/// non-numeric.
pub fn parse_content_range(header: Option<&str>) -> Option<u64> {
    header
        .and_then(|value| value.rsplit('/').next())
        .and_then(|total| total.parse().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    fn raw_root(paths: &[&str]) -> RawRoot {
        RawRoot {
            paths: paths
                .iter()
                .map(|path| (path.to_string(), json!({})))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn filters_non_table_roots_and_sorts() {
        let raw = raw_root(&["/", "/users", "/orders", "/rpc/foo", "/graphql"]);
        let names = filter_tables(raw, &IntrospectOptions::default());
        assert_eq!(names, vec!["orders", "users"]);
    }

    #[test]
    fn deduplicates_nested_paths() {
        let raw = raw_root(&["/users", "/users/{id}"]);
        let names = filter_tables(raw, &IntrospectOptions::default());
        assert_eq!(names, vec!["users"]);
    }

    #[test]
    fn restricts_to_requested_tables() {
        let raw = raw_root(&["/users", "/orders"]);
        let opts = IntrospectOptions {
            tables: Some(vec!["users".to_string()]),
            ..IntrospectOptions::default()
        };
        assert_eq!(filter_tables(raw, &opts), vec!["users"]);
    }

    #[test]
    fn parses_numeric_content_range_total() {
        assert_eq!(parse_content_range(Some("0-0/42")), Some(42));
    }

    #[test]
    fn ignores_wildcard_or_missing_totals() {
        assert_eq!(parse_content_range(Some("*/*")), None);
        assert_eq!(parse_content_range(Some("0-0/*")), None);
        assert_eq!(parse_content_range(None), None);
    }
}
