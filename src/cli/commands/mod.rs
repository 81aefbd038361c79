//! CLI command implementations

pub mod csv;
pub mod json;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::inference::InferenceConfig;

/// Load input content from a file, or from stdin when `input` is `-`
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load inference settings from a TOML file.
///
/// Keys are camelCase (`rootTableName`, `parentLink`, `scalarArrays`,
/// `maxDepth`); missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<InferenceConfig, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&content).map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))
}
