//! Import functionality
//!
//! Turns raw text into structured input for the schema engine:
//! - JSON (strict, loose/hand-written, or newline-delimited)
//! - CSV (header row, key-role row, data rows)

pub mod csv;
pub mod json;

/// Error during import
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// Text could not be coerced into JSON; carries the parser's message
    #[error("{0}")]
    ParseError(String),
}

// Re-export for convenience
pub use csv::CSVImporter;
pub use json::{JSONNormalizer, NormalizeStage, NormalizedJson, normalize};
