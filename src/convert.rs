//! End-to-end conversions: text in, SQL and diagram text out.
//!
//! These are the entry points the CLI and the browser bindings call. Every
//! failure surfaces as a [`ConvertError`], and
//! [`ConvertError::user_message`] renders it the way the tool's output pane
//! shows it.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::export::{CsvSQLExporter, ExportError, MermaidExporter, SQLExporter};
use crate::import::{CSVImporter, ImportError, JSONNormalizer, NormalizeStage};
use crate::inference::{InferenceConfig, InferenceError, InferenceStats, RelationalInferrer};
use crate::models::Schema;

/// Error from any stage of a conversion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ConvertError {
    /// Human-readable message for the output surface
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Import(ImportError::ParseError(msg)) => format!(
                "Invalid JSON: {}\n\nTip: Paste standard JSON, NDJSON, or JSON-like data (loose JSON).",
                msg
            ),
            ConvertError::Inference(InferenceError::InputShapeError(_)) => {
                "Input is not a valid JSON object or array.".to_string()
            }
            ConvertError::Export(ExportError::InputShapeError(msg)) => msg.clone(),
            other => format!("Error processing data: {}", other),
        }
    }
}

/// Everything produced from one JSON input
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Full script: each table's CREATE TABLE followed by its INSERTs
    pub sql: String,
    /// CREATE TABLE statement per table, in discovery order
    pub tables: IndexMap<String, String>,
    /// Mermaid ER diagram
    pub erd: String,
    pub schema: Schema,
    pub stats: InferenceStats,
    /// How much repair the input needed
    pub stage: NormalizeStage,
}

/// Convert JSON, NDJSON or loose JSON text into SQL and an ER diagram
pub fn json_to_sql(text: &str, config: &InferenceConfig) -> Result<Conversion, ConvertError> {
    let normalized = JSONNormalizer::new().parse(text)?;
    let conversion = value_to_sql(&normalized.value, config, normalized.stage)?;
    info!(
        tables = conversion.schema.tables.len(),
        stage = ?conversion.stage,
        "Generated SQL from JSON input"
    );
    Ok(conversion)
}

/// Convert an already-parsed JSON value
pub fn value_to_sql(
    value: &Value,
    config: &InferenceConfig,
    stage: NormalizeStage,
) -> Result<Conversion, ConvertError> {
    let (schema, stats) = RelationalInferrer::with_config(config.clone()).infer_with_stats(value)?;
    let sql = SQLExporter.export(&schema)?.content;
    let tables = SQLExporter::export_per_table(&schema);
    let erd = MermaidExporter::export(&schema)?;
    debug!(bytes = sql.len(), "Rendered SQL script");

    Ok(Conversion {
        sql,
        tables,
        erd,
        schema,
        stats,
        stage,
    })
}

/// Convert CSV text (names row, key-role row, data rows) into SQL
pub fn csv_to_sql(text: &str, table_name: Option<&str>) -> Result<String, ConvertError> {
    let rows = CSVImporter::default().parse(text);
    let exporter = match table_name {
        Some(name) => CsvSQLExporter::with_table_name(name),
        None => CsvSQLExporter::new(),
    };
    let sql = exporter.generate(&rows)?;
    info!(rows = rows.len(), "Generated SQL from CSV input");
    Ok(sql)
}
