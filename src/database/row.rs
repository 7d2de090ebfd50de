//! Flat decoded row at the ingest boundary
//!
//! One `ApproachRow` per source record. Object-level fields repeat on
//! every row for the same object; the index builder deduplicates.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Columns that must be present in every source file.
///
/// The hazard column is optional: sources without it decode the flag
/// as `false`.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "nasa_jpl_url",
    "absolute_magnitude_h",
    "estimated_diameter_min_kilometers",
    "close_approach_date",
    "miss_distance_kilometers",
];

/// A flat decoded record carrying both object-level and pass-level
/// fields, as produced by the source schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproachRow {
    /// NASA reference id
    pub id: String,
    /// Object name (identity key for deduplication)
    pub name: String,
    /// NASA JPL reference URL
    #[serde(rename = "nasa_jpl_url")]
    pub jpl_url: String,
    /// Absolute magnitude (H)
    #[serde(rename = "absolute_magnitude_h")]
    pub absolute_magnitude: f64,
    /// Minimum estimated diameter in kilometers
    #[serde(rename = "estimated_diameter_min_kilometers")]
    pub diameter_min_km: f64,
    /// Potentially-hazardous flag; absent column decodes as false
    #[serde(
        rename = "is_potentially_hazardous_asteroid",
        default,
        deserialize_with = "flag_from_text"
    )]
    pub is_hazardous: bool,
    /// Calendar date of the close approach (ISO YYYY-MM-DD)
    #[serde(rename = "close_approach_date")]
    pub approach_date: NaiveDate,
    /// Miss distance in kilometers
    #[serde(rename = "miss_distance_kilometers")]
    pub miss_distance_km: f64,
}

/// Decodes the hazard flag from its textual forms.
///
/// Source files write `True`/`False` (and some exports `1`/`0`), so a
/// plain bool deserializer is not enough.
fn flag_from_text<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid hazard flag '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(csv_text: &str) -> Result<Vec<ApproachRow>, csv::Error> {
        csv::Reader::from_reader(csv_text.as_bytes())
            .deserialize()
            .collect()
    }

    #[test]
    fn test_decode_full_row() {
        let text = "\
id,name,nasa_jpl_url,absolute_magnitude_h,estimated_diameter_min_kilometers,is_potentially_hazardous_asteroid,close_approach_date,miss_distance_kilometers
2000433,433 Eros,https://example.test/433,10.4,15.579,False,2020-01-01,54022540.0
";
        let rows = decode(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "433 Eros");
        assert_eq!(rows[0].diameter_min_km, 15.579);
        assert!(!rows[0].is_hazardous);
        assert_eq!(
            rows[0].approach_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_hazard_flag_textual_forms() {
        let text = "\
id,name,nasa_jpl_url,absolute_magnitude_h,estimated_diameter_min_kilometers,is_potentially_hazardous_asteroid,close_approach_date,miss_distance_kilometers
1,A,u,1.0,1.0,True,2020-01-01,1.0
2,B,u,1.0,1.0,false,2020-01-01,1.0
3,C,u,1.0,1.0,1,2020-01-01,1.0
";
        let rows = decode(text).unwrap();
        assert!(rows[0].is_hazardous);
        assert!(!rows[1].is_hazardous);
        assert!(rows[2].is_hazardous);
    }

    #[test]
    fn test_hazard_column_optional() {
        let text = "\
id,name,nasa_jpl_url,absolute_magnitude_h,estimated_diameter_min_kilometers,close_approach_date,miss_distance_kilometers
1,A,u,1.0,1.0,2020-01-01,1.0
";
        let rows = decode(text).unwrap();
        assert!(!rows[0].is_hazardous);
    }

    #[test]
    fn test_bad_date_rejected() {
        let text = "\
id,name,nasa_jpl_url,absolute_magnitude_h,estimated_diameter_min_kilometers,close_approach_date,miss_distance_kilometers
1,A,u,1.0,1.0,not-a-date,1.0
";
        assert!(decode(text).is_err());
    }
}
