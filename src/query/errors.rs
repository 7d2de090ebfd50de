//! Query error types
//!
//! All query errors are detectable at build or validation time; an
//! absent date or an empty filter result is a legitimate empty result,
//! never an error.
//!
//! Error codes:
//! - NEO_FILTER_PARSE (ERROR)
//! - NEO_UNSUPPORTED_FIELD (ERROR)
//! - NEO_INVALID_DATE (ERROR)
//! - NEO_INVALID_LIMIT (ERROR)

use std::fmt;

/// Query-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Malformed filter string or literal value
    NeoFilterParse,
    /// Unknown filter field name
    NeoUnsupportedField,
    /// Unparseable query date
    NeoInvalidDate,
    /// Non-positive result limit
    NeoInvalidLimit,
}

impl QueryErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::NeoFilterParse => "NEO_FILTER_PARSE",
            QueryErrorCode::NeoUnsupportedField => "NEO_UNSUPPORTED_FIELD",
            QueryErrorCode::NeoInvalidDate => "NEO_INVALID_DATE",
            QueryErrorCode::NeoInvalidLimit => "NEO_INVALID_LIMIT",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with context
#[derive(Debug)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
}

impl QueryError {
    /// Malformed filter string
    pub fn filter_parse(raw: &str, reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::NeoFilterParse,
            message: format!("Cannot parse filter '{}': {}", raw, reason.into()),
        }
    }

    /// Unknown filter field
    pub fn unsupported_field(field: &str) -> Self {
        Self {
            code: QueryErrorCode::NeoUnsupportedField,
            message: format!(
                "Unsupported filter field '{}' (supported: diameter, is_hazardous, distance)",
                field
            ),
        }
    }

    /// Unparseable query date
    pub fn invalid_date(raw: &str, reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::NeoInvalidDate,
            message: format!("Invalid date '{}': {}", raw, reason.into()),
        }
    }

    /// Missing query date
    pub fn missing_date(which: &str) -> Self {
        Self {
            code: QueryErrorCode::NeoInvalidDate,
            message: format!("Missing required {} date", which),
        }
    }

    /// Non-positive limit
    pub fn invalid_limit(limit: usize) -> Self {
        Self {
            code: QueryErrorCode::NeoInvalidLimit,
            message: format!("Result limit must be positive, got {}", limit),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for QueryError {}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
