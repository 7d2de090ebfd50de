//! neodb CLI entry point
//!
//! A minimal entrypoint that parses arguments, dispatches to the CLI
//! module, and exits non-zero on failure. Failures are logged to
//! stderr by the CLI layer; all logic lives in the library.

use neodb::cli;

fn main() {
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
