//! Entity model for neodb
//!
//! Two entity kinds:
//! - `CelestialObject`: a uniquely named near-Earth object with its
//!   physical attributes and the list of recorded close approaches
//! - `ApproachPass`: one recorded close approach of an object on a
//!   specific date at a specific miss distance
//!
//! A pass is exclusively owned by exactly one object; it carries the
//! owning object's name as a back-reference only.

mod object;
mod pass;

pub use object::CelestialObject;
pub use pass::ApproachPass;
