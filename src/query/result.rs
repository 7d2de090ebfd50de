//! Result types for query execution

use crate::models::{ApproachPass, CelestialObject};

use super::spec::ResultShape;

/// An ordered search result, borrowing from the database.
///
/// The variant follows the requested `ResultShape`: whole objects or
/// flattened passes.
#[derive(Debug)]
pub enum ResultSet<'a> {
    Objects(Vec<&'a CelestialObject>),
    Passes(Vec<&'a ApproachPass>),
}

impl<'a> ResultSet<'a> {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        match self {
            ResultSet::Objects(objects) => objects.len(),
            ResultSet::Passes(passes) => passes.len(),
        }
    }

    /// Returns true if no entry matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the shape of this result.
    pub fn shape(&self) -> ResultShape {
        match self {
            ResultSet::Objects(_) => ResultShape::Objects,
            ResultSet::Passes(_) => ResultShape::Passes,
        }
    }

    /// Returns the objects, if this is an object-shaped result.
    pub fn objects(&self) -> Option<&[&'a CelestialObject]> {
        match self {
            ResultSet::Objects(objects) => Some(objects),
            ResultSet::Passes(_) => None,
        }
    }

    /// Returns the passes, if this is a pass-shaped result.
    pub fn passes(&self) -> Option<&[&'a ApproachPass]> {
        match self {
            ResultSet::Passes(passes) => Some(passes),
            ResultSet::Objects(_) => None,
        }
    }
}
