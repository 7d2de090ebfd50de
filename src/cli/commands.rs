//! CLI command implementations
//!
//! The query command runs the full pipeline: decode the CSV source,
//! build the database, normalize the search, execute it, and hand the
//! result set to the output sink.

use std::path::PathBuf;

use crate::database::{CsvSource, NeoDatabase};
use crate::observability::Logger;
use crate::query::{NeoSearcher, QueryRequest, ResultShape};
use crate::writer::{NeoWriter, OutputFormat};

use super::args::{Cli, Command};
use super::errors::{CliErrorCode, CliResult};

/// Parses arguments and dispatches to the command implementation.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Dispatches a parsed CLI to its command, logging any failure.
///
/// Load failures are FATAL (the database is built exactly once);
/// query and output failures are ERROR.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let result = dispatch(cli);
    if let Err(e) = &result {
        let fields = [("code", e.code().code()), ("error", e.message())];
        match e.code() {
            CliErrorCode::Load => Logger::fatal("COMMAND_FAILED", &fields),
            CliErrorCode::Query | CliErrorCode::Output => {
                Logger::error("COMMAND_FAILED", &fields)
            }
        }
    }
    result
}

fn dispatch(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Query {
            data,
            date,
            start_date,
            end_date,
            filters,
            limit,
            return_object,
            output_format,
            output_file,
        } => query(QueryArgs {
            data,
            date,
            start_date,
            end_date,
            filters,
            limit,
            shape: return_object.into(),
            format: output_format.into(),
            output_file,
        }),
    }
}

/// Collected arguments for the query command.
pub struct QueryArgs {
    pub data: Option<PathBuf>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub filters: Vec<String>,
    pub limit: usize,
    pub shape: ResultShape,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Runs one load-build-search-write cycle.
pub fn query(args: QueryArgs) -> CliResult<()> {
    let source = CsvSource::from_config(args.data.as_deref())?;
    let rows = source.load()?;
    Logger::info(
        "DATA_LOADED",
        &[
            ("rows", &rows.len().to_string()),
            ("source", &source.path().display().to_string()),
        ],
    );

    let db = NeoDatabase::build(rows)?;
    Logger::info(
        "INDEX_BUILT",
        &[
            ("objects", &db.object_count().to_string()),
            ("dates", &db.date_count().to_string()),
        ],
    );

    let spec = QueryRequest {
        date: args.date,
        start_date: args.start_date,
        end_date: args.end_date,
        filters: args.filters,
        limit: args.limit,
        shape: args.shape,
    }
    .build()?;
    let rendered: Vec<String> = spec.filters().iter().map(|p| p.to_string()).collect();
    Logger::info(
        "QUERY_PLANNED",
        &[
            ("filters", &rendered.join(",")),
            ("limit", &spec.limit().to_string()),
        ],
    );

    let results = NeoSearcher::new(&db).execute(&spec)?;
    Logger::info(
        "QUERY_COMPLETE",
        &[
            ("returned", &results.len().to_string()),
            ("shape", results.shape().as_str()),
        ],
    );

    NeoWriter::write(args.format, &results, args.output_file.as_deref())?;
    Ok(())
}
