//! Database error types
//!
//! All load/build failures are FATAL: the database is built exactly
//! once from a full dataset and no partial database is ever served.
//!
//! Error codes:
//! - NEO_NO_DATA_SOURCE (FATAL)
//! - NEO_DATA_READ (FATAL)
//! - NEO_MISSING_COLUMN (FATAL)
//! - NEO_MALFORMED_ROW (FATAL)
//! - NEO_EMPTY_DATASET (FATAL)

use std::fmt;

/// Severity levels for database errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation failed but the process may continue
    Error,
    /// Build cannot proceed; the caller must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Database-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseErrorCode {
    /// No data source was configured
    NeoNoDataSource,
    /// Source file could not be read
    NeoDataRead,
    /// A required column is absent from the source
    NeoMissingColumn,
    /// A row carried an unparseable field value
    NeoMalformedRow,
    /// The source decoded to zero rows
    NeoEmptyDataset,
}

impl DatabaseErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            DatabaseErrorCode::NeoNoDataSource => "NEO_NO_DATA_SOURCE",
            DatabaseErrorCode::NeoDataRead => "NEO_DATA_READ",
            DatabaseErrorCode::NeoMissingColumn => "NEO_MISSING_COLUMN",
            DatabaseErrorCode::NeoMalformedRow => "NEO_MALFORMED_ROW",
            DatabaseErrorCode::NeoEmptyDataset => "NEO_EMPTY_DATASET",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        // Every load failure aborts the build
        Severity::Fatal
    }
}

impl fmt::Display for DatabaseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Database error with context
#[derive(Debug)]
pub struct DatabaseError {
    code: DatabaseErrorCode,
    message: String,
    /// 1-based source row number, if applicable
    row: Option<usize>,
}

impl DatabaseError {
    /// No data source configured
    pub fn no_data_source() -> Self {
        Self {
            code: DatabaseErrorCode::NeoNoDataSource,
            message: "Cannot load data, no data source configured".to_string(),
            row: None,
        }
    }

    /// Source file read failure
    pub fn read_failed(source: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self {
            code: DatabaseErrorCode::NeoDataRead,
            message: format!("Failed to read {}: {}", source, reason.into()),
            row: None,
        }
    }

    /// Required column absent
    pub fn missing_column(column: &str) -> Self {
        Self {
            code: DatabaseErrorCode::NeoMissingColumn,
            message: format!("Required column '{}' is absent", column),
            row: None,
        }
    }

    /// Unparseable field value in a row
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self {
            code: DatabaseErrorCode::NeoMalformedRow,
            message: format!("Malformed row {}: {}", row, reason.into()),
            row: Some(row),
        }
    }

    /// Zero decoded rows
    pub fn empty_dataset() -> Self {
        Self {
            code: DatabaseErrorCode::NeoEmptyDataset,
            message: "Dataset contains no rows".to_string(),
            row: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> DatabaseErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source row number if applicable
    pub fn row(&self) -> Option<usize> {
        self.row
    }
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for DatabaseError {}

/// Result type for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
