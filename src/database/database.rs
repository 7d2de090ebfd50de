//! In-memory NEO database
//!
//! Holds every `CelestialObject` in an arena plus two derived lookup
//! structures:
//! - `by_name`: object name -> arena handle (one entry per unique name)
//! - `by_date`: approach date -> arena handles, one append per source
//!   row (an object registered on the same date by several rows
//!   appears several times; downstream limit semantics depend on it)
//!
//! Both indexes resolve to the same arena slot, so the object reached
//! through a date lookup is the single shared instance, never a copy.
//!
//! Date iteration order is chronological (`BTreeMap` order). This is
//! the deterministic order consumed by range searches.
//!
//! The database is immutable once built; all lookups are pure reads.

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::NaiveDate;

use crate::models::CelestialObject;

use super::builder::IndexBuilder;
use super::errors::DatabaseResult;
use super::reader::CsvSource;
use super::row::ApproachRow;

/// Arena handle for a `CelestialObject`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(super) usize);

/// The built, read-only NEO database.
#[derive(Debug)]
pub struct NeoDatabase {
    pub(super) objects: Vec<CelestialObject>,
    pub(super) by_name: HashMap<String, ObjectId>,
    pub(super) by_date: BTreeMap<NaiveDate, Vec<ObjectId>>,
}

impl NeoDatabase {
    /// Builds a database from decoded rows.
    ///
    /// Fails on an empty row set; never produces a partial database.
    pub fn build(rows: Vec<ApproachRow>) -> DatabaseResult<Self> {
        let mut builder = IndexBuilder::new();
        for row in rows {
            builder.ingest(row);
        }
        builder.finish()
    }

    /// Loads and builds a database from a CSV file in one step.
    pub fn from_csv(path: &Path) -> DatabaseResult<Self> {
        let rows = CsvSource::new(path).load()?;
        Self::build(rows)
    }

    /// Resolves an arena handle to its object.
    pub fn object(&self, id: ObjectId) -> &CelestialObject {
        &self.objects[id.0]
    }

    /// Looks up an object by its unique name.
    pub fn get_by_name(&self, name: &str) -> Option<&CelestialObject> {
        self.by_name.get(name).map(|id| self.object(*id))
    }

    /// Returns the handles registered on a date, in row order.
    ///
    /// An absent date yields an empty slice, never an error.
    pub fn objects_on(&self, date: NaiveDate) -> &[ObjectId] {
        self.by_date.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Iterates handles registered on dates within the inclusive
    /// range, in chronological order then row order within a date.
    pub fn objects_between(
        &self,
        range: RangeInclusive<NaiveDate>,
    ) -> impl Iterator<Item = ObjectId> + '_ {
        self.by_date
            .range(range)
            .flat_map(|(_, ids)| ids.iter().copied())
    }

    /// Returns the number of unique objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns the number of distinct indexed dates.
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }
}
