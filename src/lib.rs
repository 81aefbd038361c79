//! json2sql - Relational schema inference and SQL generation
//!
//! Provides:
//! - JSON import with repair for loose and newline-delimited input
//! - Relational schema inference (tables, column types, parent/child keys)
//! - SQL export (CREATE TABLE and INSERT statements)
//! - Mermaid ER diagram export
//! - Single-table SQL generation from CSV
//! - Validation of generated schemas and scripts

pub mod cli;
pub mod convert;
pub mod export;
pub mod import;
pub mod inference;
pub mod models;
pub mod validation;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

// Re-export commonly used types
pub use convert::{Conversion, ConvertError, csv_to_sql, json_to_sql};
pub use export::{CsvSQLExporter, ExportError, ExportResult, MermaidExporter, SQLExporter};
pub use import::{CSVImporter, ImportError, JSONNormalizer, NormalizeStage, normalize};
pub use inference::{InferenceConfig, InferenceError, RelationalInferrer, infer};
pub use validation::{RelationshipValidator, ValidationError, validate_sql};

// Re-export models
pub use models::{Column, ForeignKey, Row, Schema, SqlType, Table};
