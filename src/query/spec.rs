//! Query specification
//!
//! A `QuerySpec` is the normalized, immutable description of one
//! search: a date predicate, an optional filter chain, a result shape,
//! and a result-count cap. It is built from raw, already-parsed
//! parameters via `QueryRequest::build`.

use chrono::NaiveDate;

use super::errors::{QueryError, QueryResult};
use super::filters::{FilterChain, FilterPredicate};

/// The date predicate of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSearch {
    /// Objects with a pass on exactly this date
    Equals(NaiveDate),
    /// Objects with a pass on any date in the inclusive range
    Between(NaiveDate, NaiveDate),
}

/// Whether a search returns whole objects or flattened passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultShape {
    #[default]
    Objects,
    Passes,
}

impl ResultShape {
    /// Returns the shape name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultShape::Objects => "objects",
            ResultShape::Passes => "passes",
        }
    }
}

/// Normalized, immutable search description
#[derive(Debug, Clone)]
pub struct QuerySpec {
    date_search: DateSearch,
    limit: usize,
    filters: Vec<FilterPredicate>,
    shape: ResultShape,
}

impl QuerySpec {
    /// Returns the date predicate.
    pub fn date_search(&self) -> DateSearch {
        self.date_search
    }

    /// Returns the result-count cap.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the filter chain in declaration order.
    pub fn filters(&self) -> &[FilterPredicate] {
        &self.filters
    }

    /// Returns the requested result shape.
    pub fn shape(&self) -> ResultShape {
        self.shape
    }
}

/// Raw search parameters, as handed over by the configuration surface.
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    /// Single date (equals search)
    pub date: Option<String>,
    /// Range start (between search)
    pub start_date: Option<String>,
    /// Range end; presence selects the between search
    pub end_date: Option<String>,
    /// Raw `field:op:value` filter strings, in declaration order
    pub filters: Vec<String>,
    /// Result-count cap; must be positive, no implicit default
    pub limit: usize,
    /// Requested result shape
    pub shape: ResultShape,
}

impl QueryRequest {
    /// Normalizes raw parameters into a `QuerySpec`.
    ///
    /// An end date selects the between search even when a single date
    /// was also supplied; this is strict precedence, not validation.
    /// Filter strings and dates are parsed here, so every malformed
    /// input fails before any search work happens.
    pub fn build(self) -> QueryResult<QuerySpec> {
        if self.limit == 0 {
            return Err(QueryError::invalid_limit(self.limit));
        }

        let date_search = match non_empty(self.end_date.as_deref()) {
            Some(end) => {
                let start = non_empty(self.start_date.as_deref())
                    .ok_or_else(|| QueryError::missing_date("start"))?;
                DateSearch::Between(parse_date(start)?, parse_date(end)?)
            }
            None => {
                let date = non_empty(self.date.as_deref())
                    .ok_or_else(|| QueryError::missing_date("search"))?;
                DateSearch::Equals(parse_date(date)?)
            }
        };

        let filters = FilterChain::parse_all(&self.filters)?;

        Ok(QuerySpec {
            date_search,
            limit: self.limit,
            filters,
            shape: self.shape,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_date(raw: &str) -> QueryResult<NaiveDate> {
    raw.parse()
        .map_err(|e: chrono::ParseError| QueryError::invalid_date(raw, e.to_string()))
}
