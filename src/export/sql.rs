//! SQL exporter for generating CREATE TABLE and INSERT statements from an
//! inferred schema.
//!
//! # Identifiers
//!
//! Table and column names are wrapped in double quotes and otherwise emitted
//! as-is. A name containing `"` produces invalid SQL.

use std::fmt::Write;

use indexmap::IndexMap;
use serde_json::Value;

use crate::export::{ExportError, ExportResult};
use crate::models::{PRIMARY_KEY_COLUMN, Row, Schema, Table};

/// Exporter for SQL DDL and DML.
pub struct SQLExporter;

impl SQLExporter {
    /// Export a table to a CREATE TABLE statement.
    ///
    /// The synthetic `id` primary key always comes first. A data column that
    /// happens to be called `id` is not repeated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use json2sql::export::sql::SQLExporter;
    /// use json2sql::models::{SqlType, Table};
    ///
    /// let mut table = Table::new("users".to_string());
    /// table.ensure_column("name", SqlType::Text);
    ///
    /// let sql = SQLExporter::export_table(&table);
    /// assert_eq!(
    ///     sql,
    ///     "CREATE TABLE \"users\" (\n  \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n  \"name\" TEXT\n);"
    /// );
    /// ```
    pub fn export_table(table: &Table) -> String {
        let mut defs = vec![format!(
            "  {} INTEGER PRIMARY KEY AUTOINCREMENT",
            Self::quote_identifier(PRIMARY_KEY_COLUMN)
        )];

        for column in table.columns.values() {
            if column.name == PRIMARY_KEY_COLUMN {
                continue;
            }
            defs.push(format!(
                "  {} {}",
                Self::quote_identifier(&column.name),
                column.data_type
            ));
        }

        for fk in &table.foreign_keys {
            defs.push(format!(
                "  FOREIGN KEY ({}) REFERENCES {}({})",
                Self::quote_identifier(&fk.column),
                Self::quote_identifier(&fk.referenced_table),
                Self::quote_identifier(PRIMARY_KEY_COLUMN)
            ));
        }

        format!(
            "CREATE TABLE {} (\n{}\n);",
            Self::quote_identifier(&table.name),
            defs.join(",\n")
        )
    }

    /// Export rows to INSERT statements, one per line.
    ///
    /// Every statement lists all of the table's columns in order; values a
    /// row does not have are written as `NULL`. A table without columns gets
    /// `DEFAULT VALUES` rows so each still receives its id.
    pub fn export_inserts(table: &Table, rows: &[Row]) -> Result<String, ExportError> {
        let mut sql = String::new();
        if rows.is_empty() {
            return Ok(sql);
        }

        if table.columns.is_empty() {
            for _ in rows {
                writeln!(
                    sql,
                    "INSERT INTO {} DEFAULT VALUES;",
                    Self::quote_identifier(&table.name)
                )?;
            }
            return Ok(sql);
        }

        let column_list = table
            .column_names()
            .map(Self::quote_identifier)
            .collect::<Vec<_>>()
            .join(", ");

        for row in rows {
            let values = table
                .column_names()
                .map(|name| Self::format_value(row.get(name)))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    ExportError::EmissionError(format!("table \"{}\": {}", table.name, e))
                })?;
            writeln!(
                sql,
                "INSERT INTO {} ({}) VALUES ({});",
                Self::quote_identifier(&table.name),
                column_list,
                values.join(", ")
            )?;
        }

        Ok(sql)
    }

    /// Export the whole schema: each table's DDL followed by its INSERTs.
    pub fn export(&self, schema: &Schema) -> Result<ExportResult, ExportError> {
        let mut sql = String::new();
        for table in schema.tables.values() {
            write!(sql, "{}\n\n", Self::export_table(table))?;
            let rows = schema.rows(&table.name);
            if !rows.is_empty() {
                writeln!(sql, "{}", Self::export_inserts(table, rows)?)?;
            }
        }

        Ok(ExportResult {
            content: sql.trim().to_string(),
            format: "sql".to_string(),
        })
    }

    /// CREATE TABLE statements keyed by table name, in discovery order
    pub fn export_per_table(schema: &Schema) -> IndexMap<String, String> {
        schema
            .tables
            .values()
            .map(|table| (table.name.clone(), Self::export_table(table)))
            .collect()
    }

    /// Render one row value as an SQL literal.
    ///
    /// Strings are single-quoted with embedded quotes doubled; absent values
    /// and nulls become `NULL`. Nested values never appear in rows.
    pub fn format_value(value: Option<&Value>) -> Result<String, ExportError> {
        match value {
            None | Some(Value::Null) => Ok("NULL".to_string()),
            Some(Value::String(s)) => Ok(format!("'{}'", s.replace('\'', "''"))),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(other) => Err(ExportError::EmissionError(format!(
                "nested value cannot be written as a column: {}",
                other
            ))),
        }
    }

    fn quote_identifier(identifier: &str) -> String {
        format!("\"{}\"", identifier)
    }
}
