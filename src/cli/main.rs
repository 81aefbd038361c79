//! json2sql command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use json2sql::cli::CliError;
use json2sql::cli::commands::csv::{CsvArgs, handle_csv};
use json2sql::cli::commands::json::{JsonArgs, handle_json};
use json2sql::cli::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "json2sql", author, version, about)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Infer tables from JSON, NDJSON or loose JSON and emit SQL
    Json {
        /// Input file, or `-` for stdin
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a Mermaid ER diagram to this file
        #[arg(long)]
        erd: Option<PathBuf>,

        /// Output format: sql, json or yaml (json/yaml dump the inferred schema)
        #[arg(short, long, default_value = "sql")]
        format: String,

        /// TOML file with inference settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the top-level table
        #[arg(long)]
        root_name: Option<String>,

        /// Write parent_id = 1 for every child row instead of the parent's row id
        #[arg(long)]
        placeholder_parent_ids: bool,

        /// Keep scalar array elements as rows with a `value` column
        #[arg(long)]
        scalar_values: bool,

        /// Check relationships and SQL syntax before writing
        #[arg(long)]
        validate: bool,
    },

    /// Generate single-table SQL from CSV (names row, key-role row, data)
    Csv {
        /// Input file, or `-` for stdin
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Table name
        #[arg(short, long)]
        table: Option<String>,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Json {
            input,
            output,
            erd,
            format,
            config,
            root_name,
            placeholder_parent_ids,
            scalar_values,
            validate,
        } => handle_json(&JsonArgs {
            input,
            output,
            erd,
            format,
            config,
            root_name,
            placeholder_parent_ids,
            scalar_values,
            validate,
        }),
        Commands::Csv {
            input,
            output,
            table,
        } => handle_csv(&CsvArgs {
            input,
            output,
            table,
        }),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
