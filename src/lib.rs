//! neodb - a deterministic, in-memory query engine for near-Earth
//! object close approaches
//!
//! Loads a close-approach dataset once, builds two indexes (by object
//! name and by approach date), and answers searches combining a date
//! predicate, a field-filter chain, a result shape, and a result-count
//! cap.

pub mod cli;
pub mod database;
pub mod models;
pub mod observability;
pub mod query;
pub mod writer;
