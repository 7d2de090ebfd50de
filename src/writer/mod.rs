//! Output subsystem for neodb
//!
//! Serializes finished result sets for the user:
//! - display mode: one line per entity on stdout
//! - csv-file mode: projected columns written to an explicit path
//!
//! An unrecognized format fails before anything is written; file
//! output never falls back to an implicit default filename.

mod errors;
mod writer;

pub use errors::{WriterError, WriterErrorCode, WriterResult};
pub use writer::{NeoWriter, OutputFormat};
