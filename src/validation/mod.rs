//! Validation functionality
//!
//! Provides validation logic for:
//! - Relationship validation (dangling references, missing parent links,
//!   circular dependencies)
//! - SQL validation (generated scripts parse as SQLite)

pub mod relationships;
pub mod sql;

/// Error during validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("SQL validation failed: {0}")]
    SqlError(String),
    #[error("Relationship validation failed: {0}")]
    RelationshipError(String),
}

pub use relationships::{RelationshipValidationResult, RelationshipValidator};
pub use sql::validate_sql;
