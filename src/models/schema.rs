//! Relational schema produced by inference

use super::table::Table;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One extracted record: column name to scalar value, in key order
pub type Row = IndexMap<String, Value>;

/// Tables and their rows, both in discovery order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    pub tables: IndexMap<String, Table>,
    #[serde(default)]
    pub rows: IndexMap<String, Vec<Row>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Rows extracted for `name`; empty when the table has none
    pub fn rows(&self, name: &str) -> &[Row] {
        self.rows.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the table called `name`, creating an empty one on first use
    pub fn table_entry(&mut self, name: &str) -> &mut Table {
        self.tables
            .entry(name.to_string())
            .or_insert_with(|| Table::new(name.to_string()))
    }

    /// Append a row and return its 1-based position within the table
    pub fn push_row(&mut self, table: &str, row: Row) -> usize {
        let rows = self.rows.entry(table.to_string()).or_default();
        rows.push(row);
        rows.len()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}
