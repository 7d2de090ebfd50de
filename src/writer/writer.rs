//! Result output sink
//!
//! Serializes a finished `ResultSet` either as display lines or as a
//! CSV file. The sink owns field projection; core query types never
//! format themselves for output beyond their `Display` impls.

use std::io::Write;
use std::path::Path;

use crate::models::{ApproachPass, CelestialObject};
use crate::query::ResultSet;

use super::errors::{WriterError, WriterResult};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per entity on a display stream
    Display,
    /// Projected columns written to a CSV file
    CsvFile,
}

impl OutputFormat {
    /// Parses a format name. Unrecognized names fail; nothing is
    /// written on that path.
    pub fn parse(name: &str) -> WriterResult<Self> {
        match name {
            "display" => Ok(OutputFormat::Display),
            "csv-file" | "csv_file" => Ok(OutputFormat::CsvFile),
            other => Err(WriterError::unsupported_format(other)),
        }
    }

    /// Returns the format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Display => "display",
            OutputFormat::CsvFile => "csv-file",
        }
    }
}

/// Writes search results to the configured sink.
pub struct NeoWriter;

impl NeoWriter {
    /// Writes results in the given format.
    ///
    /// `destination` is required for file output; there is no implicit
    /// default filename.
    pub fn write(
        format: OutputFormat,
        results: &ResultSet<'_>,
        destination: Option<&Path>,
    ) -> WriterResult<()> {
        match format {
            OutputFormat::Display => {
                let stdout = std::io::stdout();
                Self::write_display(&mut stdout.lock(), results)
            }
            OutputFormat::CsvFile => {
                let path = destination.ok_or_else(WriterError::missing_destination)?;
                Self::write_csv(path, results)
            }
        }
    }

    /// Writes one line per entity to the given stream.
    pub fn write_display<W: Write>(out: &mut W, results: &ResultSet<'_>) -> WriterResult<()> {
        match results {
            ResultSet::Objects(objects) => {
                for object in objects {
                    writeln!(out, "{}", object)?;
                }
            }
            ResultSet::Passes(passes) => {
                for pass in passes {
                    writeln!(out, "{}", pass)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Writes projected columns to a CSV file.
    pub fn write_csv(path: &Path, results: &ResultSet<'_>) -> WriterResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        match results {
            ResultSet::Objects(objects) => {
                writer.write_record([
                    "name",
                    "nasa_jpl_url",
                    "absolute_magnitude_h",
                    "diameter_min_km",
                    "is_potentially_hazardous_asteroid",
                ])?;
                for object in objects {
                    Self::write_object_row(&mut writer, object)?;
                }
            }
            ResultSet::Passes(passes) => {
                writer.write_record(["name", "miss_distance_kilometers", "close_approach_date"])?;
                for pass in passes {
                    Self::write_pass_row(&mut writer, pass)?;
                }
            }
        }
        writer.flush().map_err(WriterError::from)?;
        Ok(())
    }

    fn write_object_row<W: Write>(
        writer: &mut csv::Writer<W>,
        object: &CelestialObject,
    ) -> WriterResult<()> {
        writer.write_record([
            object.name.as_str(),
            object.jpl_url.as_str(),
            &object.absolute_magnitude.to_string(),
            &object.diameter_min_km.to_string(),
            &object.is_hazardous.to_string(),
        ])?;
        Ok(())
    }

    fn write_pass_row<W: Write>(
        writer: &mut csv::Writer<W>,
        pass: &ApproachPass,
    ) -> WriterResult<()> {
        writer.write_record([
            pass.neo_name.as_str(),
            &pass.miss_distance_km.to_string(),
            &pass.approach_date.format("%Y-%m-%d").to_string(),
        ])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApproachPass, CelestialObject};
    use crate::writer::errors::WriterErrorCode;
    use chrono::NaiveDate;

    fn sample_object() -> CelestialObject {
        CelestialObject::new("1", "Eros", "https://example.test/1", 10.4, 15.5, false)
    }

    fn sample_pass() -> ApproachPass {
        ApproachPass::new(
            "Eros",
            54022540.0,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("display").unwrap(), OutputFormat::Display);
        assert_eq!(OutputFormat::parse("csv-file").unwrap(), OutputFormat::CsvFile);
    }

    #[test]
    fn test_unrecognized_format_rejected() {
        let err = OutputFormat::parse("xml").unwrap_err();
        assert_eq!(err.code(), WriterErrorCode::NeoUnsupportedOutputFormat);
    }

    #[test]
    fn test_file_output_requires_destination() {
        let object = sample_object();
        let results = ResultSet::Objects(vec![&object]);
        let err = NeoWriter::write(OutputFormat::CsvFile, &results, None).unwrap_err();
        assert_eq!(err.code(), WriterErrorCode::NeoMissingDestination);
    }

    #[test]
    fn test_display_writes_one_line_per_entity() {
        let object = sample_object();
        let results = ResultSet::Objects(vec![&object, &object]);

        let mut buffer = Vec::new();
        NeoWriter::write_display(&mut buffer, &results).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Eros"));
    }

    #[test]
    fn test_csv_object_projection() {
        let object = sample_object();
        let results = ResultSet::Objects(vec![&object]);

        let file = tempfile::NamedTempFile::new().unwrap();
        NeoWriter::write_csv(file.path(), &results).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,nasa_jpl_url,absolute_magnitude_h,diameter_min_km,is_potentially_hazardous_asteroid"
        );
        assert!(lines.next().unwrap().starts_with("Eros,"));
    }

    #[test]
    fn test_csv_pass_projection() {
        let pass = sample_pass();
        let results = ResultSet::Passes(vec![&pass]);

        let file = tempfile::NamedTempFile::new().unwrap();
        NeoWriter::write_csv(file.path(), &results).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,miss_distance_kilometers,close_approach_date"
        );
        assert_eq!(lines.next().unwrap(), "Eros,54022540,2020-01-01");
    }
}
