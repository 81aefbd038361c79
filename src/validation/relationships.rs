//! Relationship validation functionality
//!
//! Checks the parent/child links of an inferred schema: every table except
//! the root hangs off exactly one existing table, and the links form no
//! cycle.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::ValidationError;
use crate::models::Schema;

/// Result of relationship validation
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RelationshipValidationResult {
    /// Foreign keys pointing at tables that do not exist
    pub dangling_references: Vec<DanglingReference>,
    /// Non-root tables without a parent link
    pub unlinked_tables: Vec<String>,
    /// Tables with more than one parent link
    pub multiple_parents: Vec<String>,
    /// Tables taking part in a cycle of parent links
    pub circular_dependencies: Vec<String>,
}

impl RelationshipValidationResult {
    pub fn is_valid(&self) -> bool {
        self.dangling_references.is_empty()
            && self.unlinked_tables.is_empty()
            && self.multiple_parents.is_empty()
            && self.circular_dependencies.is_empty()
    }
}

/// Foreign key whose target table is missing
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingReference {
    pub table: String,
    pub referenced_table: String,
}

/// Relationship validator
#[derive(Debug, Default)]
pub struct RelationshipValidator;

impl RelationshipValidator {
    /// Create a new relationship validator
    pub fn new() -> Self {
        Self
    }

    /// Validate the foreign keys of `schema`.
    ///
    /// The first table in discovery order is taken to be the root.
    pub fn validate(&self, schema: &Schema) -> RelationshipValidationResult {
        let mut result = RelationshipValidationResult::default();
        let root = schema.tables.keys().next();

        for (name, table) in &schema.tables {
            match table.foreign_keys.len() {
                0 if Some(name) != root => result.unlinked_tables.push(name.clone()),
                0 | 1 => {}
                _ => result.multiple_parents.push(name.clone()),
            }

            for fk in &table.foreign_keys {
                if !schema.tables.contains_key(&fk.referenced_table) {
                    result.dangling_references.push(DanglingReference {
                        table: name.clone(),
                        referenced_table: fk.referenced_table.clone(),
                    });
                }
            }
        }

        if let Err(cycle_at) = self.load_order(schema) {
            result.circular_dependencies.push(cycle_at);
        }

        result
    }

    /// Order tables so that every table comes after the table it references.
    ///
    /// Returns the name of a table on the cycle when no such order exists.
    pub fn load_order(&self, schema: &Schema) -> Result<Vec<String>, String> {
        let mut graph = DiGraph::<&str, ()>::new();
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

        for name in schema.table_names() {
            node_map.insert(name, graph.add_node(name));
        }

        for table in schema.tables.values() {
            for fk in &table.foreign_keys {
                if let (Some(&parent), Some(&child)) = (
                    node_map.get(fk.referenced_table.as_str()),
                    node_map.get(table.name.as_str()),
                ) {
                    graph.add_edge(parent, child, ());
                }
            }
        }

        toposort(&graph, None)
            .map(|order| order.into_iter().map(|idx| graph[idx].to_string()).collect())
            .map_err(|cycle| graph[cycle.node_id()].to_string())
    }

    /// Validate and turn any finding into an error
    pub fn check(&self, schema: &Schema) -> Result<(), ValidationError> {
        let result = self.validate(schema);
        if result.is_valid() {
            return Ok(());
        }

        let mut problems = Vec::new();
        for dangling in &result.dangling_references {
            problems.push(format!(
                "{} references missing table {}",
                dangling.table, dangling.referenced_table
            ));
        }
        for table in &result.unlinked_tables {
            problems.push(format!("{} has no parent link", table));
        }
        for table in &result.multiple_parents {
            problems.push(format!("{} has more than one parent link", table));
        }
        for table in &result.circular_dependencies {
            problems.push(format!("{} is part of a circular dependency", table));
        }
        Err(ValidationError::RelationshipError(problems.join("; ")))
    }
}
