//! Close-approach pass entity

use std::fmt;

use chrono::NaiveDate;

/// One recorded close approach of a near-Earth object.
///
/// Exclusively owned by its `CelestialObject`; `neo_name` is a
/// back-reference to the owner, not an ownership link.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachPass {
    /// Name of the owning object
    pub neo_name: String,
    /// Miss distance in kilometers
    pub miss_distance_km: f64,
    /// Calendar date of the close approach
    pub approach_date: NaiveDate,
}

impl ApproachPass {
    /// Creates a pass record.
    pub fn new(neo_name: impl Into<String>, miss_distance_km: f64, approach_date: NaiveDate) -> Self {
        Self {
            neo_name: neo_name.into(),
            miss_distance_km,
            approach_date,
        }
    }
}

impl fmt::Display for ApproachPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Miss Distance (km): {}, Close Approach Date: {}",
            self.neo_name,
            self.miss_distance_km,
            self.approach_date.format("%Y-%m-%d")
        )
    }
}
