//! Query executor
//!
//! Resolves a `QuerySpec` against the database.
//!
//! Execution flow (strict order):
//! 1. Resolve the candidate set from the date predicate
//! 2. Apply the filter chain (object-kind, then pass-kind)
//! 3. Reshape per the requested result shape
//! 4. Truncate to the first `limit` entries (pure prefix take)
//!
//! Execution is deterministic: candidates arrive in chronological date
//! order, row order within a date, and no step sorts or randomizes.
//! An absent date or an empty filter result is an empty result, not an
//! error.

use crate::database::NeoDatabase;
use crate::models::CelestialObject;

use super::errors::{QueryError, QueryResult};
use super::filters::FilterChain;
use super::result::ResultSet;
use super::spec::{DateSearch, QuerySpec, ResultShape};

/// Executes query specifications against a built database.
pub struct NeoSearcher<'a> {
    db: &'a NeoDatabase,
}

impl<'a> NeoSearcher<'a> {
    /// Creates a searcher over the given database.
    pub fn new(db: &'a NeoDatabase) -> Self {
        Self { db }
    }

    /// Executes a search, returning at most `spec.limit()` entries.
    pub fn execute(&self, spec: &QuerySpec) -> QueryResult<ResultSet<'a>> {
        if spec.limit() == 0 {
            return Err(QueryError::invalid_limit(spec.limit()));
        }

        let candidates = self.date_candidates(spec.date_search());
        let survivors = FilterChain::apply(spec.filters(), candidates);

        Ok(match spec.shape() {
            ResultShape::Objects => {
                let mut objects = survivors;
                objects.truncate(spec.limit());
                ResultSet::Objects(objects)
            }
            ResultShape::Passes => {
                // The FULL pass list of each survivor, not only the
                // passes that matched the date or a distance filter
                let mut passes: Vec<_> = survivors
                    .iter()
                    .flat_map(|object| object.passes())
                    .collect();
                passes.truncate(spec.limit());
                ResultSet::Passes(passes)
            }
        })
    }

    /// Resolves the date predicate into candidate objects.
    fn date_candidates(&self, search: DateSearch) -> Vec<&'a CelestialObject> {
        match search {
            DateSearch::Equals(date) => self
                .db
                .objects_on(date)
                .iter()
                .map(|&id| self.db.object(id))
                .collect(),
            // An inverted range is an empty result, not a panic
            DateSearch::Between(start, end) if start > end => Vec::new(),
            DateSearch::Between(start, end) => self
                .db
                .objects_between(start..=end)
                .map(|id| self.db.object(id))
                .collect(),
        }
    }
}
