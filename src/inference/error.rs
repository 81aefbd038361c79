//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur during schema inference
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Root value cannot be turned into tables
    #[error("Input shape error: expected object or array at root, found {0}")]
    InputShapeError(String),

    /// Maximum depth exceeded
    #[error("Maximum nesting depth exceeded: {depth} > {max}")]
    MaxDepthExceeded { depth: usize, max: usize },
}
