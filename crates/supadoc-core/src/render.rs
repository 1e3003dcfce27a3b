use crate::schema::{Column, SampleData, SchemaReport, TableReport};

/// Render the full markdown document written to the report file.
///
/// Layout: title, total-table-count line, then one section per table in the
/// order they appear in the report, each closed by a horizontal rule.
pub fn render_report(report: &SchemaReport) -> String {
    let mut lines = Vec::new();

    lines.push("# Supabase Public Schema Tables".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Total number of tables found: {}",
        report.tables.len()
    ));
    lines.push(String::new());

    for table in &report.tables {
        push_table_section(&mut lines, table);
    }

    lines.join("\n") + "\n"
}

fn push_table_section(lines: &mut Vec<String>, table: &TableReport) {
    lines.push(format!("## Table: {}", table.name));
    lines.push(String::new());

    lines.push("| Column Name | Type | Default Value | Primary |".to_string());
    lines.push("|------------|------|---------------|---------|".to_string());
    for column in &table.columns {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            column.name,
            column.data_type,
            default_cell(column),
            if column.is_primary { "Yes" } else { "No" }
        ));
    }
    lines.push(String::new());

    match &table.sample {
        SampleData::Collected { row, total_rows } => {
            if let Some(row) = row {
                lines.push("### Sample Data".to_string());
                lines.push("```json".to_string());
                lines.push(
                    serde_json::to_string_pretty(row).unwrap_or_else(|_| row.to_string()),
                );
                lines.push("```".to_string());
                lines.push(String::new());
            }
            if let Some(total) = total_rows {
                lines.push(format!("Total rows: {total}"));
            }
        }
        SampleData::Unavailable => {
            lines.push("*No data available or table not accessible*".to_string());
        }
        SampleData::Failed => {
            lines.push("*Error accessing table data*".to_string());
        }
        SampleData::Skipped => {}
    }

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
}

/// Default-value cell: the parsed default when present, otherwise a
/// nullability marker.
fn default_cell(column: &Column) -> String {
    match &column.default {
        Some(value) => value.clone(),
        None if !column.is_nullable => "NOT NULL".to_string(),
        None => "NULL".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::REPORT_VERSION;

    fn report(tables: Vec<TableReport>) -> SchemaReport {
        SchemaReport {
            report_version: REPORT_VERSION.to_string(),
            endpoint: "https://example.supabase.co".to_string(),
            tables,
        }
    }

    fn table(name: &str, columns: Vec<Column>, sample: SampleData) -> TableReport {
        TableReport {
            name: name.to_string(),
            columns,
            sample,
        }
    }

    #[test]
    fn renders_full_document() {
        let columns = vec![
            Column {
                name: "id".to_string(),
                data_type: "bigint".to_string(),
                is_nullable: false,
                is_primary: true,
                default: None,
            },
            Column {
                name: "email".to_string(),
                data_type: "text".to_string(),
                is_nullable: true,
                is_primary: false,
                default: None,
            },
        ];
        let sample = SampleData::Collected {
            row: Some(json!({"id": 1})),
            total_rows: Some(3),
        };
        let rendered = render_report(&report(vec![table("users", columns, sample)]));

        let expected = "# Supabase Public Schema Tables\n\n\
            Total number of tables found: 1\n\n\
            ## Table: users\n\n\
            | Column Name | Type | Default Value | Primary |\n\
            |------------|------|---------------|---------|\n\
            | id | bigint | NOT NULL | Yes |\n\
            | email | text | NULL | No |\n\n\
            ### Sample Data\n\
            ```json\n\
            {\n  \"id\": 1\n}\n\
            ```\n\n\
            Total rows: 3\n\n\
            ---\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_headers_only_table_when_columns_missing() {
        let rendered = render_report(&report(vec![table(
            "ghost",
            Vec::new(),
            SampleData::Unavailable,
        )]));
        assert!(rendered.contains(
            "| Column Name | Type | Default Value | Primary |\n\
             |------------|------|---------------|---------|\n\n"
        ));
    }

    #[test]
    fn unavailable_table_gets_placeholder_and_no_sample_block() {
        let rendered = render_report(&report(vec![table(
            "private_stuff",
            Vec::new(),
            SampleData::Unavailable,
        )]));
        assert!(rendered.contains("*No data available or table not accessible*"));
        assert!(!rendered.contains("### Sample Data"));
    }

    #[test]
    fn failed_table_gets_error_placeholder() {
        let rendered = render_report(&report(vec![table(
            "flaky",
            Vec::new(),
            SampleData::Failed,
        )]));
        assert!(rendered.contains("*Error accessing table data*"));
    }

    #[test]
    fn collected_without_rows_renders_neither_block_nor_count() {
        let sample = SampleData::Collected {
            row: None,
            total_rows: None,
        };
        let rendered = render_report(&report(vec![table("empty", Vec::new(), sample)]));
        assert!(!rendered.contains("### Sample Data"));
        assert!(!rendered.contains("Total rows:"));
    }

    #[test]
    fn renders_one_section_per_table_in_order() {
        let rendered = render_report(&report(vec![
            table("orders", Vec::new(), SampleData::Skipped),
            table("users", Vec::new(), SampleData::Skipped),
        ]));
        let orders = rendered.find("## Table: orders").expect("orders section");
        let users = rendered.find("## Table: users").expect("users section");
        assert!(orders < users);
        assert!(rendered.contains("Total number of tables found: 2"));
    }
}
