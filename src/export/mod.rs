//! Export functionality
//!
//! Provides exporters for:
//! - SQL (CREATE TABLE and INSERT statements for an inferred schema)
//! - Mermaid ER diagrams
//! - CSV-driven single-table SQL

pub mod csv_sql;
pub mod mermaid;
pub mod sql;

/// Result of an export operation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("{0}")]
    EmissionError(String),
    #[error("Input shape error: {0}")]
    InputShapeError(String),
}

impl From<std::fmt::Error> for ExportError {
    fn from(err: std::fmt::Error) -> Self {
        ExportError::EmissionError(err.to_string())
    }
}

// Re-export for convenience
pub use csv_sql::CsvSQLExporter;
pub use mermaid::MermaidExporter;
pub use sql::SQLExporter;
