//! Table model for the SDK

use super::column::{Column, SqlType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the synthetic primary key every table carries
pub const PRIMARY_KEY_COLUMN: &str = "id";

/// Name of the column linking a child table to its parent
pub const PARENT_ID_COLUMN: &str = "parent_id";

/// Foreign key from a column of this table to another table's `id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForeignKey {
    /// Column in the owning table
    pub column: String,
    /// Table whose primary key is referenced
    pub referenced_table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Table {
    pub name: String,
    /// Columns in discovery order
    pub columns: IndexMap<String, Column>,
    pub primary_key: String,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: IndexMap::new(),
            primary_key: PRIMARY_KEY_COLUMN.to_string(),
            foreign_keys: Vec::new(),
        }
    }

    /// Add a column unless one with the same name already exists.
    ///
    /// Returns `true` when the column was added. An existing column keeps
    /// the type it was first given.
    pub fn ensure_column(&mut self, name: &str, data_type: SqlType) -> bool {
        if self.columns.contains_key(name) {
            return false;
        }
        self.columns
            .insert(name.to_string(), Column::new(name.to_string(), data_type));
        true
    }

    /// Add the `parent_id` column and its foreign key, once.
    ///
    /// Returns `false` when the table already hangs off a different parent;
    /// the existing link is kept.
    pub fn ensure_parent_link(&mut self, parent_table: &str) -> bool {
        self.ensure_column(PARENT_ID_COLUMN, SqlType::Integer);
        if let Some(existing) = self.parent_table() {
            return existing == parent_table;
        }
        self.foreign_keys.push(ForeignKey {
            column: PARENT_ID_COLUMN.to_string(),
            referenced_table: parent_table.to_string(),
        });
        true
    }

    /// The table this one hangs off, if any
    pub fn parent_table(&self) -> Option<&str> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.column == PARENT_ID_COLUMN)
            .map(|fk| fk.referenced_table.as_str())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_type_wins() {
        let mut table = Table::new("root".to_string());
        assert!(table.ensure_column("age", SqlType::Integer));
        assert!(!table.ensure_column("age", SqlType::Text));
        assert_eq!(table.columns["age"].data_type, SqlType::Integer);
    }

    #[test]
    fn test_parent_link_added_once() {
        let mut table = Table::new("root_pets".to_string());
        table.ensure_parent_link("root");
        table.ensure_parent_link("root");
        assert_eq!(table.foreign_keys.len(), 1);
        assert_eq!(table.parent_table(), Some("root"));
        assert_eq!(table.columns[PARENT_ID_COLUMN].data_type, SqlType::Integer);
    }

    #[test]
    fn test_second_parent_rejected() {
        let mut table = Table::new("root_a_b".to_string());
        assert!(table.ensure_parent_link("root_a"));
        assert!(table.ensure_parent_link("root_a"));
        assert!(!table.ensure_parent_link("root"));
        assert_eq!(table.parent_table(), Some("root_a"));
        assert_eq!(table.foreign_keys.len(), 1);
    }
}
