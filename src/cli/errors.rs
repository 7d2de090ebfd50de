//! CLI-specific error types
//!
//! Wraps subsystem errors for the top-level exit path, preserving the
//! inner error code in the message.

use std::fmt;

use crate::database::DatabaseError;
use crate::query::QueryError;
use crate::writer::WriterError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Dataset load or index build failed
    Load,
    /// Query construction or execution failed
    Query,
    /// Result output failed
    Output,
}

impl CliErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            CliErrorCode::Load => "NEO_CLI_LOAD",
            CliErrorCode::Query => "NEO_CLI_QUERY",
            CliErrorCode::Output => "NEO_CLI_OUTPUT",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Creates a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<DatabaseError> for CliError {
    fn from(e: DatabaseError) -> Self {
        Self::new(CliErrorCode::Load, e.to_string())
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        Self::new(CliErrorCode::Query, e.to_string())
    }
}

impl From<WriterError> for CliError {
    fn from(e: WriterError) -> Self {
        Self::new(CliErrorCode::Output, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
