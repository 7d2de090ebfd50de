//! Query subsystem for neodb
//!
//! Covers the full life of a search:
//! - `QueryRequest` / `QuerySpec`: raw parameters normalized into an
//!   immutable search description
//! - `FilterPredicate` / `FilterChain`: the closed, typed field
//!   predicate set
//! - `NeoSearcher`: resolves a spec against the database
//! - `ResultSet`: the ordered, shape-typed outcome
//!
//! # Invariants
//!
//! - Every malformed input is rejected at build time, before search
//! - Execution is deterministic and purely read-only
//! - Absent dates and empty filter results are empty results, never
//!   errors

mod errors;
mod filters;
mod result;
mod searcher;
mod spec;

pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use filters::{Comparator, FilterChain, FilterField, FilterPredicate, TargetKind};
pub use result::ResultSet;
pub use searcher::NeoSearcher;
pub use spec::{DateSearch, QueryRequest, QuerySpec, ResultShape};
