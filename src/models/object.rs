//! Near-Earth object entity

use std::fmt;

use super::pass::ApproachPass;

/// A uniquely named near-Earth object.
///
/// Identity is the `name` field (case-sensitive primary key). Exactly
/// one instance exists per unique name; rows beyond the first for a
/// name extend the pass list and never overwrite object-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    /// NASA reference id
    pub id: String,
    /// Unique object name (primary key)
    pub name: String,
    /// NASA JPL reference URL
    pub jpl_url: String,
    /// Absolute magnitude (H)
    pub absolute_magnitude: f64,
    /// Minimum estimated diameter in kilometers
    pub diameter_min_km: f64,
    /// Potentially-hazardous flag
    pub is_hazardous: bool,
    /// Recorded close approaches in source row order
    passes: Vec<ApproachPass>,
}

impl CelestialObject {
    /// Creates an object with an empty pass list.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        jpl_url: impl Into<String>,
        absolute_magnitude: f64,
        diameter_min_km: f64,
        is_hazardous: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            jpl_url: jpl_url.into(),
            absolute_magnitude,
            diameter_min_km,
            is_hazardous,
            passes: Vec::new(),
        }
    }

    /// Appends a recorded close approach.
    ///
    /// Pass order is insertion order (source row order), not
    /// chronological order.
    pub fn record_pass(&mut self, pass: ApproachPass) {
        self.passes.push(pass);
    }

    /// Returns the recorded passes in insertion order.
    pub fn passes(&self) -> &[ApproachPass] {
        &self.passes
    }

    /// Returns the number of recorded passes.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, NASA JPL URL: {}, Absolute Magnitude: {}, \
             Diameter Min (km): {}, Hazardous: {}",
            self.name,
            self.jpl_url,
            self.absolute_magnitude,
            self.diameter_min_km,
            self.is_hazardous
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn eros() -> CelestialObject {
        CelestialObject::new(
            "2000433",
            "433 Eros",
            "https://ssd.jpl.nasa.gov/?sstr=2000433",
            10.4,
            15.579,
            false,
        )
    }

    #[test]
    fn test_new_object_has_no_passes() {
        let obj = eros();
        assert!(obj.passes().is_empty());
        assert_eq!(obj.pass_count(), 0);
    }

    #[test]
    fn test_passes_keep_insertion_order() {
        let mut obj = eros();
        let later = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        // Deliberately out of chronological order
        obj.record_pass(ApproachPass::new("433 Eros", 5000.0, later));
        obj.record_pass(ApproachPass::new("433 Eros", 1000.0, earlier));

        assert_eq!(obj.pass_count(), 2);
        assert_eq!(obj.passes()[0].approach_date, later);
        assert_eq!(obj.passes()[1].approach_date, earlier);
    }

    #[test]
    fn test_display_includes_identity() {
        let text = format!("{}", eros());
        assert!(text.contains("433 Eros"));
        assert!(text.contains("Hazardous: false"));
    }
}
