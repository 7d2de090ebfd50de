//! CLI argument definitions using clap
//!
//! Single command:
//! - neodb query --data <csv> --date <d> | --start-date <d> --end-date <d>
//!   [--filter field:op:value]... --limit <n> --return-object objects|passes
//!   [--output-format display|csv-file] [--output-file <path>]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::query::ResultShape;
use crate::writer::OutputFormat;

/// neodb - deterministic in-memory NEO close-approach query engine
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a dataset and execute a single search
    Query {
        /// Path to the close-approach CSV dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Single approach date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Range start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Range end date (YYYY-MM-DD); selects the range search
        #[arg(long)]
        end_date: Option<String>,

        /// Field filter as field:operator:value, repeatable
        #[arg(long = "filter")]
        filters: Vec<String>,

        /// Maximum number of results (positive, no default)
        #[arg(long)]
        limit: usize,

        /// Result shape: whole objects or flattened passes
        #[arg(long, value_enum)]
        return_object: ShapeArg,

        /// Output mode
        #[arg(long, value_enum, default_value = "display")]
        output_format: FormatArg,

        /// Destination path; required for csv-file output
        #[arg(long)]
        output_file: Option<PathBuf>,
    },
}

/// Result shape argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Objects,
    Passes,
}

impl From<ShapeArg> for ResultShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Objects => ResultShape::Objects,
            ShapeArg::Passes => ResultShape::Passes,
        }
    }
}

/// Output format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Display,
    CsvFile,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Display => OutputFormat::Display,
            FormatArg::CsvFile => OutputFormat::CsvFile,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
