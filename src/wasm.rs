//! Browser bindings
//!
//! Each function returns the text for the tool's output pane: the generated
//! output on success, the user-facing error message otherwise.

use wasm_bindgen::prelude::*;

use crate::convert::{csv_to_sql, json_to_sql};
use crate::inference::InferenceConfig;

/// Generate the SQL script for JSON, NDJSON or loose JSON input
#[wasm_bindgen(js_name = jsonToSql)]
pub fn json_to_sql_text(input: &str) -> String {
    match json_to_sql(input, &InferenceConfig::default()) {
        Ok(conversion) => conversion.sql,
        Err(e) => e.user_message(),
    }
}

/// Generate the Mermaid ER diagram for JSON input
#[wasm_bindgen(js_name = jsonToErd)]
pub fn json_to_erd_text(input: &str) -> String {
    match json_to_sql(input, &InferenceConfig::default()) {
        Ok(conversion) => conversion.erd,
        Err(e) => e.user_message(),
    }
}

/// Generate single-table SQL from CSV input
#[wasm_bindgen(js_name = csvToSql)]
pub fn csv_to_sql_text(input: &str) -> String {
    csv_to_sql(input, None).unwrap_or_else(|e| e.user_message())
}
