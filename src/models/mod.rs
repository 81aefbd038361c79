//! Relational models
//!
//! Defines the relational structures inferred from JSON input and consumed
//! by the exporters.

pub mod column;
pub mod schema;
pub mod table;

pub use column::{Column, SqlType};
pub use schema::{Row, Schema};
pub use table::{ForeignKey, PARENT_ID_COLUMN, PRIMARY_KEY_COLUMN, Table};
