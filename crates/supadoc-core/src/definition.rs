use std::sync::OnceLock;

use regex::Regex;

use crate::schema::Column;

fn default_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"DEFAULT ([^,\s]+)").expect("valid default pattern"))
}

/// Parse a table definition header into ordered column metadata.
///
/// Best-effort line scan over the space-delimited layout the probed endpoint
/// emits: one column per line, name and type as the first two tokens,
/// constraint keywords anywhere on the line. Drawn-table separator lines
/// (starting with `|` or `+`) and lines with fewer than two tokens are
/// skipped; unexpected formats yield partial or empty results rather than an
/// error.
pub fn parse_table_definition(definition: &str) -> Vec<Column> {
    let mut columns = Vec::new();

    for line in definition.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('|') || line.starts_with('+') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }

        columns.push(Column {
            name: tokens[0].to_string(),
            data_type: tokens[1].to_string(),
            is_nullable: !line.contains("NOT NULL"),
            is_primary: line.contains("PRIMARY KEY"),
            default: extract_default(line),
        });
    }

    columns
}

/// Value following the first `DEFAULT ` on the line, up to the next
/// whitespace or comma.
fn extract_default(line: &str) -> Option<String> {
    default_pattern()
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Order columns for presentation: primary-key columns first, then
/// alphabetically by name within each group. The sort is stable.
pub fn sort_columns(columns: &mut [Column]) {
    columns.sort_by(|left, right| {
        right
            .is_primary
            .cmp(&left.is_primary)
            .then_with(|| left.name.cmp(&right.name))
    });
}
