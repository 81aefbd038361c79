//! Output formatting for CLI

use std::path::Path;

use crate::cli::error::CliError;
use crate::convert::Conversion;

/// Write `content` to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))?;
            eprintln!("Written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Summarize a conversion: tables, their columns and row counts
pub fn format_summary(conversion: &Conversion) -> String {
    let schema = &conversion.schema;
    let mut output = format!("\n✅ Generated {} table(s):\n", schema.tables.len());

    for table in schema.tables.values() {
        output.push_str(&format!(
            "\n  {} ({} row(s))\n",
            table.name,
            schema.rows(&table.name).len()
        ));

        let col_names: Vec<String> = table
            .columns
            .values()
            .map(|c| format!("{}:{}", c.name, c.data_type))
            .collect();
        output.push_str(&format!("    Columns: {}\n", col_names.join(", ")));

        if let Some(parent) = table.parent_table() {
            output.push_str(&format!("    Parent: {}\n", parent));
        }
    }

    if conversion.stats.scalars_dropped > 0 {
        output.push_str(&format!(
            "\n⚠️  {} scalar array element(s) skipped\n",
            conversion.stats.scalars_dropped
        ));
    }

    output
}
