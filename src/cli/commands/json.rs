//! JSON to SQL command

use std::path::PathBuf;

use tracing::debug;

use super::{load_config, load_input};
use crate::cli::error::CliError;
use crate::cli::output::{format_summary, write_output};
use crate::convert::json_to_sql;
use crate::inference::{InferenceConfig, ParentLink, ScalarArrays};
use crate::validation::{RelationshipValidator, validate_sql};

/// Arguments for the `json` command
#[derive(Debug, Clone, Default)]
pub struct JsonArgs {
    /// Input file path, or `-` for stdin
    pub input: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Where to write the Mermaid ER diagram
    pub erd: Option<PathBuf>,
    /// Output format (sql, json, yaml)
    pub format: String,
    /// TOML file with inference settings
    pub config: Option<PathBuf>,
    /// Override the root table name
    pub root_name: Option<String>,
    /// Write `parent_id = 1` for every child row
    pub placeholder_parent_ids: bool,
    /// Keep scalar array elements as `value` rows
    pub scalar_values: bool,
    /// Check the generated schema and SQL before writing
    pub validate: bool,
}

impl JsonArgs {
    /// Build the inference configuration: config file first, flags on top
    pub fn inference_config(&self) -> Result<InferenceConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => InferenceConfig::default(),
        };
        if let Some(name) = &self.root_name {
            config.root_table_name = name.clone();
        }
        if self.placeholder_parent_ids {
            config.parent_link = ParentLink::Placeholder;
        }
        if self.scalar_values {
            config.scalar_arrays = ScalarArrays::ValueColumn;
        }
        Ok(config)
    }
}

/// Handle the `json` command
pub fn handle_json(args: &JsonArgs) -> Result<(), CliError> {
    let config = args.inference_config()?;
    debug!(?config, "Using inference configuration");

    let content = load_input(&args.input)?;
    let conversion = json_to_sql(&content, &config)?;

    if args.validate {
        RelationshipValidator::new().check(&conversion.schema)?;
        if !conversion.sql.is_empty() {
            let statements = validate_sql(&conversion.sql)?;
            eprintln!("Validated {} SQL statement(s)", statements);
        }
    }

    let rendered = match args.format.as_str() {
        "sql" | "" => conversion.sql.clone(),
        "json" => serde_json::to_string_pretty(&conversion.schema)
            .map_err(|e| CliError::SerializationError(e.to_string()))?,
        "yaml" => serde_yaml::to_string(&conversion.schema)
            .map_err(|e| CliError::SerializationError(e.to_string()))?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}",
                other
            )));
        }
    };

    write_output(args.output.as_deref(), &rendered)?;

    if let Some(erd_path) = &args.erd {
        write_output(Some(erd_path), &conversion.erd)?;
    }

    if args.output.is_some() {
        eprintln!("{}", format_summary(&conversion));
    }

    Ok(())
}
