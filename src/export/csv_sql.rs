//! Single-table SQL generation from CSV rows.
//!
//! The first row holds column names and the second a key role per column
//! (`1` primary key, `2` foreign key placeholder, anything else none). Every
//! following row is data.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::export::ExportError;

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

const DEFAULT_TABLE_NAME: &str = "my_table";

/// Exporter for CSV-described tables
pub struct CsvSQLExporter {
    /// Name used in the CREATE TABLE and INSERT statements
    pub table_name: String,
}

impl Default for CsvSQLExporter {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl CsvSQLExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_name(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// Generate one CREATE TABLE followed by one INSERT per data row.
    ///
    /// A column is `INT` when every data value is all digits and
    /// `VARCHAR(255)` otherwise. Fewer than three rows is an
    /// `InputShapeError`.
    pub fn generate(&self, rows: &[Vec<String>]) -> Result<String, ExportError> {
        if rows.len() < 3 {
            return Err(ExportError::InputShapeError(
                "CSV must have at least 3 rows: column names, key indicators, and data."
                    .to_string(),
            ));
        }

        let columns = &rows[0];
        let keys = &rows[1];
        let data = &rows[2..];

        let column_defs: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut def = format!("\"{}\" {}", name, column_type(data, i));
                match keys.get(i).map(String::as_str) {
                    Some("1") => def.push_str(" PRIMARY KEY"),
                    Some("2") => def.push_str(" FOREIGN KEY REFERENCES <Placeholder>"),
                    _ => {}
                }
                def
            })
            .collect();

        let mut statements = vec![format!(
            "CREATE TABLE {} (\n  {}\n);",
            self.table_name,
            column_defs.join(",\n  ")
        )];

        let column_list = columns
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ");

        for row in data {
            let values: Vec<String> = (0..columns.len())
                .map(|i| row.get(i).map_or_else(|| "NULL".to_string(), |v| format_value(v)))
                .collect();
            statements.push(format!(
                "INSERT INTO {} ({}) VALUES ({});",
                self.table_name,
                column_list,
                values.join(", ")
            ));
        }

        Ok(statements.join("\n"))
    }
}

fn column_type(data: &[Vec<String>], index: usize) -> &'static str {
    let all_digits = data
        .iter()
        .all(|row| row.get(index).is_some_and(|v| DIGITS_REGEX.is_match(v)));
    if all_digits { "INT" } else { "VARCHAR(255)" }
}

fn format_value(value: &str) -> String {
    if is_numeric(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::CSVImporter;

    fn rows(text: &str) -> Vec<Vec<String>> {
        CSVImporter::default().parse(text)
    }

    #[test]
    fn test_simple_table() {
        let sql = CsvSQLExporter::new()
            .generate(&rows("name,age\n0,0\nBob,30"))
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE my_table (\n  \"name\" VARCHAR(255),\n  \"age\" INT\n);\nINSERT INTO my_table (\"name\", \"age\") VALUES ('Bob', 30);"
        );
    }

    #[test]
    fn test_key_roles() {
        let sql = CsvSQLExporter::with_table_name("people")
            .generate(&rows("id,team_id,name\n1,2,0\n1,7,Ann"))
            .unwrap();
        assert!(sql.contains("\"id\" INT PRIMARY KEY"));
        assert!(sql.contains("\"team_id\" INT FOREIGN KEY REFERENCES <Placeholder>"));
        assert!(sql.contains("\"name\" VARCHAR(255)\n"));
        assert!(sql.starts_with("CREATE TABLE people ("));
    }

    #[test]
    fn test_decimal_column_is_varchar_but_unquoted() {
        let sql = CsvSQLExporter::new().generate(&rows("price\n0\n9.5")).unwrap();
        assert!(sql.contains("\"price\" VARCHAR(255)"));
        assert!(sql.ends_with("VALUES (9.5);"));
    }

    #[test]
    fn test_quotes_escaped_and_missing_cells_null() {
        let sql = CsvSQLExporter::new()
            .generate(&rows("a,b\n0,0\nit's"))
            .unwrap();
        assert!(sql.ends_with("VALUES ('it''s', NULL);"));
    }

    #[test]
    fn test_too_few_rows() {
        let result = CsvSQLExporter::new().generate(&rows("name,age\n0,0"));
        assert!(matches!(result, Err(ExportError::InputShapeError(_))));
    }
}
