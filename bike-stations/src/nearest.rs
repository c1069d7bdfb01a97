//! Nearest-station selection.
//!
//! Ranks directory entries by great-circle distance to a target and keeps
//! the closest few.

use crate::domain::{Coordinate, StationId, StationRecord};

/// Number of stations returned when only the closest one is wanted.
pub const SINGLE: usize = 1;

/// Number of stations returned for a shortlist.
pub const SHORTLIST: usize = 3;

/// A station paired with its distance to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub station: StationId,
    pub distance_km: f64,
}

/// Select the `k` stations closest to `target`, closest first.
///
/// Ties keep the order in which stations appear in `stations`. An empty
/// directory yields an empty result.
pub fn select_nearest(
    stations: &[StationRecord],
    target: &Coordinate,
    k: usize,
) -> Vec<RankedCandidate> {
    let mut candidates: Vec<RankedCandidate> = stations
        .iter()
        .map(|record| RankedCandidate {
            station: record.id,
            distance_km: target.distance_km(&record.position),
        })
        .collect();

    // sort_by is stable, so equal distances stay in directory order
    candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    candidates.truncate(k);

    candidates
}
