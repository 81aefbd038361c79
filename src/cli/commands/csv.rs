//! CSV to SQL command

use std::path::PathBuf;

use super::load_input;
use crate::cli::error::CliError;
use crate::cli::output::write_output;
use crate::convert::csv_to_sql;

/// Arguments for the `csv` command
#[derive(Debug, Clone, Default)]
pub struct CsvArgs {
    /// Input file path, or `-` for stdin
    pub input: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Table name used in the statements
    pub table: Option<String>,
}

/// Handle the `csv` command
pub fn handle_csv(args: &CsvArgs) -> Result<(), CliError> {
    let content = load_input(&args.input)?;
    let sql = csv_to_sql(&content, args.table.as_deref())?;
    write_output(args.output.as_deref(), &sql)
}
