//! CSV source decoding
//!
//! Decodes the raw tabular file into flat `ApproachRow` records.
//! Column presence is validated up front so a missing column is
//! reported as such rather than as a per-row decode failure.

use std::fs::File;
use std::path::{Path, PathBuf};

use super::errors::{DatabaseError, DatabaseResult};
use super::row::{ApproachRow, REQUIRED_COLUMNS};

/// A CSV file holding close-approach records.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Creates a source for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a source from optional configuration.
    ///
    /// Fails fast when no data source was configured.
    pub fn from_config(path: Option<&Path>) -> DatabaseResult<Self> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => Err(DatabaseError::no_data_source()),
        }
    }

    /// Returns the source file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes every row of the source file.
    ///
    /// Fails on an unreadable file, an absent required column, or an
    /// unparseable field value. Never returns a partial row set.
    pub fn load(&self) -> DatabaseResult<Vec<ApproachRow>> {
        let file = File::open(&self.path)
            .map_err(|e| DatabaseError::read_failed(self.path.display(), e.to_string()))?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| DatabaseError::read_failed(self.path.display(), e.to_string()))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatabaseError::missing_column(column));
            }
        }

        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<ApproachRow>().enumerate() {
            // Row numbers are 1-based and exclude the header line
            let row = record.map_err(|e| DatabaseError::malformed_row(index + 1, e.to_string()))?;
            rows.push(row);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::errors::DatabaseErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn source_with(content: &str) -> (NamedTempFile, CsvSource) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let source = CsvSource::new(file.path());
        (file, source)
    }

    #[test]
    fn test_no_data_source_configured() {
        let err = CsvSource::from_config(None).unwrap_err();
        assert_eq!(err.code(), DatabaseErrorCode::NeoNoDataSource);
    }

    #[test]
    fn test_source_is_debug_formattable() {
        // unwrap_err on Result<CsvSource, _> needs this too
        let source = CsvSource::new("neo.csv");
        assert!(format!("{:?}", source).contains("neo.csv"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let source = CsvSource::new("/nonexistent/neo.csv");
        let err = source.load().unwrap_err();
        assert_eq!(err.code(), DatabaseErrorCode::NeoDataRead);
    }

    #[test]
    fn test_missing_column_reported_by_name() {
        let (_guard, source) = source_with(
            "id,name,nasa_jpl_url,absolute_magnitude_h,close_approach_date,miss_distance_kilometers\n\
             1,A,u,1.0,2020-01-01,1.0\n",
        );
        let err = source.load().unwrap_err();
        assert_eq!(err.code(), DatabaseErrorCode::NeoMissingColumn);
        assert!(err
            .message()
            .contains("estimated_diameter_min_kilometers"));
    }

    #[test]
    fn test_malformed_value_reports_row_number() {
        let (_guard, source) = source_with(
            "id,name,nasa_jpl_url,absolute_magnitude_h,estimated_diameter_min_kilometers,close_approach_date,miss_distance_kilometers\n\
             1,A,u,1.0,1.0,2020-01-01,1.0\n\
             2,B,u,1.0,not-a-number,2020-01-02,1.0\n",
        );
        let err = source.load().unwrap_err();
        assert_eq!(err.code(), DatabaseErrorCode::NeoMalformedRow);
        assert_eq!(err.row(), Some(2));
    }

    #[test]
    fn test_loads_all_rows() {
        let (_guard, source) = source_with(
            "id,name,nasa_jpl_url,absolute_magnitude_h,estimated_diameter_min_kilometers,close_approach_date,miss_distance_kilometers\n\
             1,A,u,1.0,1.0,2020-01-01,1000.0\n\
             1,A,u,1.0,1.0,2020-01-02,500.0\n\
             2,B,u,2.0,2.0,2020-01-02,200.0\n",
        );
        let rows = source.load().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].name, "B");
    }
}
