//! Observability subsystem for neodb
//!
//! Structured JSON logging only. Principles:
//!
//! 1. Observability is read-only
//! 2. No side effects on query execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! Core query paths stay silent; the CLI layer logs around load,
//! build, execute, and write.

mod logger;

pub use logger::{Logger, Severity};
