//! Database subsystem for neodb
//!
//! Owns dataset ingest and the two derived indexes.
//!
//! # Build flow (strict order)
//!
//! 1. Decode the CSV source into flat rows (`CsvSource`)
//! 2. Deduplicate objects by name, first row wins object fields
//! 3. Attach one pass per row to its owning object, in row order
//! 4. Register the owning object under its approach date, per row
//!
//! # Invariants
//!
//! - One `CelestialObject` instance per unique name
//! - Every date-index entry resolves to the shared instance
//! - No partial database on any load failure
//! - Immutable after `finish()`; all reads are pure

mod builder;
mod database;
mod errors;
mod reader;
mod row;

pub use builder::IndexBuilder;
pub use database::{NeoDatabase, ObjectId};
pub use errors::{DatabaseError, DatabaseErrorCode, DatabaseResult, Severity};
pub use reader::CsvSource;
pub use row::{ApproachRow, REQUIRED_COLUMNS};
