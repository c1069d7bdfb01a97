//! Domain types for the station resolver.
//!
//! Coordinates enforce their range at construction time, so code that
//! receives a `Coordinate` can compute distances without further checks.

mod coordinate;
mod station;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, InvalidCoordinate, distance_km};
pub use station::{StationId, StationRecord, StationStatus};
