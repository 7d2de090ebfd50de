//! Writer error types
//!
//! Error codes:
//! - NEO_UNSUPPORTED_OUTPUT_FORMAT (ERROR)
//! - NEO_MISSING_DESTINATION (ERROR)
//! - NEO_IO (ERROR)
//!
//! An unsupported format or missing destination is reported before
//! anything is written; there is no silent fallback.

use std::fmt;
use std::io;

/// Writer-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterErrorCode {
    /// Unrecognized output format
    NeoUnsupportedOutputFormat,
    /// File output requested without a destination path
    NeoMissingDestination,
    /// I/O failure while writing
    NeoIo,
}

impl WriterErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            WriterErrorCode::NeoUnsupportedOutputFormat => "NEO_UNSUPPORTED_OUTPUT_FORMAT",
            WriterErrorCode::NeoMissingDestination => "NEO_MISSING_DESTINATION",
            WriterErrorCode::NeoIo => "NEO_IO",
        }
    }
}

impl fmt::Display for WriterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Writer error with context
#[derive(Debug)]
pub struct WriterError {
    code: WriterErrorCode,
    message: String,
}

impl WriterError {
    /// Unrecognized output format
    pub fn unsupported_format(format: &str) -> Self {
        Self {
            code: WriterErrorCode::NeoUnsupportedOutputFormat,
            message: format!(
                "Unsupported output format '{}' (supported: display, csv-file)",
                format
            ),
        }
    }

    /// Missing destination for file output
    pub fn missing_destination() -> Self {
        Self {
            code: WriterErrorCode::NeoMissingDestination,
            message: "File output requires an explicit destination path".to_string(),
        }
    }

    /// I/O failure
    pub fn io(reason: impl Into<String>) -> Self {
        Self {
            code: WriterErrorCode::NeoIo,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> WriterErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for WriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for WriterError {}

impl From<io::Error> for WriterError {
    fn from(e: io::Error) -> Self {
        Self::io(e.to_string())
    }
}

impl From<csv::Error> for WriterError {
    fn from(e: csv::Error) -> Self {
        Self::io(format!("CSV write error: {}", e))
    }
}

/// Result type for writer operations
pub type WriterResult<T> = Result<T, WriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            WriterError::unsupported_format("xml").code().code(),
            "NEO_UNSUPPORTED_OUTPUT_FORMAT"
        );
        assert_eq!(
            WriterError::missing_destination().code().code(),
            "NEO_MISSING_DESTINATION"
        );
    }

    #[test]
    fn test_unsupported_format_names_offender() {
        let err = WriterError::unsupported_format("xml");
        assert!(err.message().contains("xml"));
    }
}
