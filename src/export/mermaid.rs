//! Mermaid ER diagram exporter

use std::fmt::Write;

use crate::export::ExportError;
use crate::models::Schema;

/// Exporter for Mermaid `erDiagram` text
pub struct MermaidExporter;

impl MermaidExporter {
    /// Render every table as an entity and every foreign key as a
    /// one-to-many relationship, in discovery order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use json2sql::export::MermaidExporter;
    /// use json2sql::inference::infer;
    /// use serde_json::json;
    ///
    /// let schema = infer(&json!({"pets": [{"species": "cat"}]})).unwrap();
    /// let erd = MermaidExporter::export(&schema).unwrap();
    /// assert!(erd.starts_with("erDiagram\n"));
    /// assert!(erd.contains("  root ||--o{ root_pets : \"parent_id\"\n"));
    /// ```
    pub fn export(schema: &Schema) -> Result<String, ExportError> {
        let mut erd = String::from("erDiagram\n");

        for table in schema.tables.values() {
            writeln!(erd, "  {} {{", table.name)?;
            for column in table.columns.values() {
                writeln!(erd, "    {} {}", column.data_type, column.name)?;
            }
            erd.push_str("  }\n");
        }

        for table in schema.tables.values() {
            for fk in &table.foreign_keys {
                writeln!(
                    erd,
                    "  {} ||--o{{ {} : \"{}\"",
                    fk.referenced_table, table.name, fk.column
                )?;
            }
        }

        Ok(erd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infer;
    use serde_json::json;

    #[test]
    fn test_entities_and_relationships() {
        let schema = infer(&json!([{"name": "Alice", "pets": [{"species": "cat"}]}])).unwrap();
        let erd = MermaidExporter::export(&schema).unwrap();
        let expected = "erDiagram\n  root {\n    TEXT name\n  }\n  root_pets {\n    INTEGER parent_id\n    TEXT species\n  }\n  root ||--o{ root_pets : \"parent_id\"\n";
        assert_eq!(erd, expected);
    }

    #[test]
    fn test_empty_schema() {
        let erd = MermaidExporter::export(&Schema::new()).unwrap();
        assert_eq!(erd, "erDiagram\n");
    }
}
