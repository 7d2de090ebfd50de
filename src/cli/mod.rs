//! CLI module for neodb
//!
//! Provides the command-line surface:
//! - query: load a dataset, execute one search, write the results

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, FormatArg, ShapeArg};
pub use commands::{query, run, run_command, QueryArgs};
pub use errors::{CliError, CliErrorCode, CliResult};
