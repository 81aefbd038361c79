//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// How child rows point back at the row that contained them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParentLink {
    /// `parent_id` holds the id the parent row gets when the script is loaded
    /// into an empty database: its own integral `id` when it carries one,
    /// otherwise the next AUTOINCREMENT value for its table
    #[default]
    RowId,
    /// Every child row carries `parent_id = 1`; the link is structural only
    Placeholder,
}

/// What happens to scalar elements of an array (`"tags": ["a", "b"]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarArrays {
    /// Scalars that are not inside an object are skipped
    #[default]
    Drop,
    /// Each scalar becomes a row of the child table with a `value` column
    ValueColumn,
}

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Name of the table built from the top-level value
    pub root_table_name: String,

    /// How `parent_id` values are filled in
    pub parent_link: ParentLink,

    /// Handling of scalar array elements
    pub scalar_arrays: ScalarArrays,

    /// Maximum nesting depth for objects and arrays
    pub max_depth: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            root_table_name: "root".to_string(),
            parent_link: ParentLink::RowId,
            scalar_arrays: ScalarArrays::Drop,
            max_depth: 64,
        }
    }
}

impl InferenceConfig {
    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the root table name
    pub fn root_table_name(mut self, name: impl Into<String>) -> Self {
        self.config.root_table_name = name.into();
        self
    }

    /// Set how child rows reference their parent
    pub fn parent_link(mut self, link: ParentLink) -> Self {
        self.config.parent_link = link;
        self
    }

    /// Set how scalar array elements are handled
    pub fn scalar_arrays(mut self, policy: ScalarArrays) -> Self {
        self.config.scalar_arrays = policy;
        self
    }

    /// Set the maximum nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
