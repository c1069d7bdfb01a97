//! Station identity, directory entries and live status.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Station number as assigned by the bike-sharing operator.
///
/// Numbers are only unique within one contract (city).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// The raw station number.
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(StationId)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station as listed in the cached directory.
///
/// Field names follow the operator listing so a raw listing can be stored
/// and read back without conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "number")]
    pub id: StationId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub position: Coordinate,
}

/// Live availability of a single station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStatus {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub is_open: bool,
    pub available_bikes: u32,
    pub available_stands: u32,
}
