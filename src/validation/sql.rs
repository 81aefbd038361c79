//! SQL syntax validation using sqlparser

use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

use super::ValidationError;

/// Parse `content` as SQLite and return the number of statements.
///
/// The CSV generator's `FOREIGN KEY REFERENCES <Placeholder>` marker is not
/// valid SQL, so only scripts from [`crate::export::SQLExporter`] are
/// expected to pass.
pub fn validate_sql(content: &str) -> Result<usize, ValidationError> {
    let dialect = SQLiteDialect {};
    let statements =
        Parser::parse_sql(&dialect, content).map_err(|e| ValidationError::SqlError(e.to_string()))?;
    Ok(statements.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_script() {
        let sql = "CREATE TABLE \"t\" (\n  \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n  \"name\" TEXT\n);\n\nINSERT INTO \"t\" (\"name\") VALUES ('a');";
        assert_eq!(validate_sql(sql).unwrap(), 2);
    }

    #[test]
    fn test_invalid_script() {
        assert!(matches!(
            validate_sql("CREATE TABL t (id INT);"),
            Err(ValidationError::SqlError(_))
        ));
    }
}
