//! Index builder
//!
//! Turns flat rows into the linked entity graph:
//! 1. The first row for a name constructs the object; later rows for
//!    the same name never overwrite its object-level fields
//! 2. Every row appends one pass to the owning object, in row order
//! 3. Every row registers the owning object under its approach date;
//!    registration is per row, so the same object may appear more
//!    than once under one date

use std::collections::{BTreeMap, HashMap};

use crate::models::{ApproachPass, CelestialObject};

use super::database::{NeoDatabase, ObjectId};
use super::errors::{DatabaseError, DatabaseResult};
use super::row::ApproachRow;

/// Accumulates rows into a `NeoDatabase`.
pub struct IndexBuilder {
    objects: Vec<CelestialObject>,
    by_name: HashMap<String, ObjectId>,
    by_date: BTreeMap<chrono::NaiveDate, Vec<ObjectId>>,
}

impl IndexBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            by_name: HashMap::new(),
            by_date: BTreeMap::new(),
        }
    }

    /// Ingests one decoded row.
    pub fn ingest(&mut self, row: ApproachRow) {
        let id = match self.by_name.get(&row.name) {
            Some(existing) => *existing,
            None => {
                let id = ObjectId(self.objects.len());
                self.objects.push(CelestialObject::new(
                    row.id.clone(),
                    row.name.clone(),
                    row.jpl_url.clone(),
                    row.absolute_magnitude,
                    row.diameter_min_km,
                    row.is_hazardous,
                ));
                self.by_name.insert(row.name.clone(), id);
                id
            }
        };

        self.objects[id.0].record_pass(ApproachPass::new(
            row.name,
            row.miss_distance_km,
            row.approach_date,
        ));

        // Per-row registration: duplicates on one date are intentional
        self.by_date.entry(row.approach_date).or_default().push(id);
    }

    /// Finalizes the build.
    ///
    /// Fails when no rows were ingested.
    pub fn finish(self) -> DatabaseResult<NeoDatabase> {
        if self.objects.is_empty() {
            return Err(DatabaseError::empty_dataset());
        }
        Ok(NeoDatabase {
            objects: self.objects,
            by_name: self.by_name,
            by_date: self.by_date,
        })
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
