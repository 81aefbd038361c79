//! Column model for the SDK

use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL column type assigned by inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    Integer,
    Real,
    Boolean,
    Text,
    Date,
    Datetime,
}

impl SqlType {
    /// The keyword used in DDL and diagram output
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Text => "TEXT",
            SqlType::Date => "DATE",
            SqlType::Datetime => "DATETIME",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Column model representing a field in a table
///
/// A column is created the first time a scalar value is seen under a key.
/// Its type is fixed at that point; later rows never widen it.
///
/// # Example
///
/// ```rust
/// use json2sql::models::{Column, SqlType};
///
/// let column = Column::new("age".to_string(), SqlType::Integer);
/// assert!(column.nullable);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Inferred SQL type
    pub data_type: SqlType,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a new nullable column with the given name and type
    pub fn new(name: String, data_type: SqlType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
        }
    }
}
