//! SQL type inference for scalar JSON values

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::SqlType;

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static REAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").unwrap());

// Date prefix followed by a space, `T`, or a word boundary
static DATE_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}([ T]|\b)").unwrap());

/// Infer the SQL type of a scalar value.
///
/// Numeric-looking and ISO-date-looking strings get numeric and date types.
/// Null, arrays, objects and every other string are `TEXT`.
pub fn infer_sql_type(value: &Value) -> SqlType {
    match value {
        Value::Bool(_) => SqlType::Boolean,
        Value::Number(n) => {
            let integral = n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0);
            if integral {
                SqlType::Integer
            } else {
                SqlType::Real
            }
        }
        Value::String(s) => infer_string_type(s.trim()),
        Value::Null | Value::Array(_) | Value::Object(_) => SqlType::Text,
    }
}

fn infer_string_type(s: &str) -> SqlType {
    if INTEGER_REGEX.is_match(s) {
        SqlType::Integer
    } else if REAL_REGEX.is_match(s) {
        SqlType::Real
    } else if DATE_PREFIX_REGEX.is_match(s) {
        if s.contains('T') {
            SqlType::Datetime
        } else {
            SqlType::Date
        }
    } else {
        SqlType::Text
    }
}
