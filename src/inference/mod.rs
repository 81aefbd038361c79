//! Relational schema inference for JSON data
//!
//! This module flattens an arbitrary JSON document into normalized tables:
//!
//! - **Table discovery** - nested objects and arrays become child tables
//!   named after their path (`root_orders_lines`)
//! - **Type inference** - each column gets an SQL type from the first value
//!   seen for it
//! - **Relationships** - child tables get a `parent_id` foreign key to the
//!   table they were found in
//! - **Row extraction** - every object becomes one row
//!
//! ## Example
//!
//! ```rust
//! use json2sql::inference::{InferenceConfig, RelationalInferrer};
//! use serde_json::json;
//!
//! let data = json!([{"name": "Alice", "pets": [{"species": "cat"}]}]);
//! let schema = RelationalInferrer::with_config(InferenceConfig::default())
//!     .infer(&data)
//!     .unwrap();
//!
//! assert_eq!(schema.tables.len(), 2);
//! assert_eq!(schema.tables["root_pets"].foreign_keys[0].referenced_table, "root");
//! ```

mod config;
mod error;
mod inferrer;
mod types;

pub use config::{InferenceConfig, InferenceConfigBuilder, ParentLink, ScalarArrays};
pub use error::InferenceError;
pub use inferrer::{InferenceStats, RelationalInferrer, VALUE_COLUMN, infer};
pub use types::infer_sql_type;
