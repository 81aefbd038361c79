//! Relational schema inference engine

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::config::{InferenceConfig, ParentLink, ScalarArrays};
use super::error::InferenceError;
use super::types::infer_sql_type;
use crate::models::{PARENT_ID_COLUMN, PRIMARY_KEY_COLUMN, Row, Schema};

/// Column that holds scalar array elements under [`ScalarArrays::ValueColumn`]
pub const VALUE_COLUMN: &str = "value";

/// Statistics from schema inference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Objects turned into rows
    pub objects_processed: usize,
    /// Scalar array elements that were skipped
    pub scalars_dropped: usize,
    /// Tables discovered
    pub tables: usize,
    /// Maximum nesting depth encountered
    pub max_depth: usize,
    /// Tables reached from more than one parent table and merged
    pub merged_tables: usize,
}

/// The row a nested value was found in
#[derive(Debug, Clone)]
struct ParentRef {
    table: String,
    row_id: i64,
}

#[derive(Debug)]
struct WorkItem<'a> {
    value: &'a Value,
    table: String,
    parent: Option<ParentRef>,
    depth: usize,
}

/// Bookkeeping for one inference run
#[derive(Debug, Default)]
struct Walk {
    /// Largest id handed out so far, per table
    last_ids: HashMap<String, i64>,
    /// Tables already reported as reached from a second parent
    collisions: HashSet<String>,
}

impl Walk {
    /// The id the next row of `table` gets when the script is loaded into an
    /// empty database: its own integral `id` if it has one, otherwise one
    /// past the largest id seen so far, as AUTOINCREMENT assigns it.
    fn next_row_id(&mut self, table: &str, explicit: Option<i64>) -> i64 {
        let last = self.last_ids.entry(table.to_string()).or_insert(0);
        let id = explicit.unwrap_or(*last + 1);
        *last = (*last).max(id);
        id
    }
}

/// Schema inference engine
///
/// Walks a JSON document breadth-first. Every object becomes a row; nested
/// objects and arrays under a key become rows of a child table named
/// `<table>_<key>` that points back at its parent through `parent_id`.
/// Arrays never create a table of their own: their elements land in the
/// table the array belongs to.
pub struct RelationalInferrer {
    config: InferenceConfig,
}

impl RelationalInferrer {
    /// Create a new inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Infer tables, columns and rows from `root`
    pub fn infer(&self, root: &Value) -> Result<Schema, InferenceError> {
        self.infer_with_stats(root).map(|(schema, _)| schema)
    }

    /// Infer the schema and report traversal statistics
    pub fn infer_with_stats(
        &self,
        root: &Value,
    ) -> Result<(Schema, InferenceStats), InferenceError> {
        if !root.is_object() && !root.is_array() {
            return Err(InferenceError::InputShapeError(
                value_type_name(root).to_string(),
            ));
        }

        let mut schema = Schema::new();
        let mut stats = InferenceStats::default();
        let mut walk = Walk::default();
        let mut queue = VecDeque::new();
        queue.push_back(WorkItem {
            value: root,
            table: self.config.root_table_name.clone(),
            parent: None,
            depth: 0,
        });

        while let Some(item) = queue.pop_front() {
            if item.depth > self.config.max_depth {
                return Err(InferenceError::MaxDepthExceeded {
                    depth: item.depth,
                    max: self.config.max_depth,
                });
            }
            stats.max_depth = stats.max_depth.max(item.depth);

            match item.value {
                Value::Array(elements) => {
                    for element in elements {
                        queue.push_back(WorkItem {
                            value: element,
                            table: item.table.clone(),
                            parent: item.parent.clone(),
                            depth: item.depth + 1,
                        });
                    }
                }
                Value::Object(object) => {
                    let explicit_id = object.get(PRIMARY_KEY_COLUMN).and_then(Value::as_i64);
                    let row_id = walk.next_row_id(&item.table, explicit_id);
                    let mut row = self.start_row(&mut schema, &mut walk, &item);

                    for (key, value) in object {
                        if value.is_array() || value.is_object() {
                            queue.push_back(WorkItem {
                                value,
                                table: format!("{}_{}", item.table, key),
                                parent: Some(ParentRef {
                                    table: item.table.clone(),
                                    row_id,
                                }),
                                depth: item.depth + 1,
                            });
                        } else {
                            schema
                                .table_entry(&item.table)
                                .ensure_column(key, infer_sql_type(value));
                            row.insert(key.clone(), value.clone());
                        }
                    }

                    schema.push_row(&item.table, row);
                    stats.objects_processed += 1;
                }
                scalar => match self.config.scalar_arrays {
                    ScalarArrays::Drop => {
                        trace!(table = %item.table, "Dropping scalar array element");
                        stats.scalars_dropped += 1;
                    }
                    ScalarArrays::ValueColumn => {
                        walk.next_row_id(&item.table, None);
                        let mut row = self.start_row(&mut schema, &mut walk, &item);
                        schema
                            .table_entry(&item.table)
                            .ensure_column(VALUE_COLUMN, infer_sql_type(scalar));
                        row.insert(VALUE_COLUMN.to_string(), scalar.clone());
                        schema.push_row(&item.table, row);
                    }
                },
            }
        }

        stats.tables = schema.tables.len();
        stats.merged_tables = walk.collisions.len();
        debug!(
            tables = stats.tables,
            objects = stats.objects_processed,
            dropped = stats.scalars_dropped,
            depth = stats.max_depth,
            merged = stats.merged_tables,
            "Schema inference complete"
        );

        Ok((schema, stats))
    }

    /// Make sure the item's table exists and begin its row with the parent
    /// link, if the item has a parent.
    fn start_row(&self, schema: &mut Schema, walk: &mut Walk, item: &WorkItem<'_>) -> Row {
        if schema.table(&item.table).is_none() {
            trace!(table = %item.table, "Discovered table");
        }
        let table = schema.table_entry(&item.table);
        let mut row = Row::new();

        if let Some(parent) = &item.parent {
            if !table.ensure_parent_link(&parent.table) && walk.collisions.insert(item.table.clone())
            {
                warn!(
                    table = %item.table,
                    existing = table.parent_table().unwrap_or_default(),
                    other = %parent.table,
                    "Table name reached from two different parents; merging"
                );
            }

            let parent_id = match self.config.parent_link {
                ParentLink::RowId => parent.row_id,
                ParentLink::Placeholder => 1,
            };
            row.insert(PARENT_ID_COLUMN.to_string(), Value::from(parent_id));
        }

        row
    }
}

impl Default for RelationalInferrer {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer a schema from `root` with the default configuration
pub fn infer(root: &Value) -> Result<Schema, InferenceError> {
    RelationalInferrer::new().infer(root)
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
