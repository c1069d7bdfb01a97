//! JCDecaux VLS API response DTOs.
//!
//! These map directly to the `/vls/v1/stations` JSON. Fields the resolver
//! never reads (contract, banking, bonus, capacity, last update) are left out.

use serde::Deserialize;

use crate::domain::{Coordinate, StationId, StationRecord, StationStatus};

/// Station status string reported by the API for a station in service.
const STATUS_OPEN: &str = "OPEN";

/// One station, as returned by both the listing and the single-station
/// endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub position: Coordinate,
    /// `OPEN` or `CLOSED`.
    pub status: String,
    #[serde(default)]
    pub available_bike_stands: u32,
    #[serde(default)]
    pub available_bikes: u32,
}

impl StationDto {
    /// Whether the API reports the station as open.
    pub fn is_open(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_OPEN)
    }

    /// Static directory attributes of this station.
    pub fn to_record(&self) -> StationRecord {
        StationRecord {
            id: StationId::new(self.number),
            name: self.name.clone(),
            address: self.address.clone(),
            position: self.position,
        }
    }
}

impl From<StationDto> for StationStatus {
    fn from(dto: StationDto) -> Self {
        let is_open = dto.is_open();
        StationStatus {
            id: StationId::new(dto.number),
            name: dto.name,
            address: dto.address,
            is_open,
            available_bikes: dto.available_bikes,
            available_stands: dto.available_bike_stands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "number": 3051,
        "name": "3051 - PLACE HENRI",
        "address": "Angle rue Docteur Long/av. Lacassagne",
        "position": { "lat": 45.748193, "lng": 4.880641 },
        "banking": true,
        "bonus": false,
        "status": "OPEN",
        "contract_name": "Lyon",
        "bike_stands": 13,
        "available_bike_stands": 12,
        "available_bikes": 0,
        "last_update": 1436196004000
    }"#;

    #[test]
    fn parse_station() {
        let dto: StationDto = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(dto.number, 3051);
        assert!(dto.is_open());
        assert_eq!(dto.available_bike_stands, 12);
    }

    #[test]
    fn converts_to_status() {
        let dto: StationDto = serde_json::from_str(SAMPLE).unwrap();
        let status = StationStatus::from(dto);
        assert_eq!(status.id, StationId::new(3051));
        assert!(status.is_open);
        assert_eq!(status.available_bikes, 0);
        assert_eq!(status.available_stands, 12);
        assert_eq!(status.address, "Angle rue Docteur Long/av. Lacassagne");
    }

    #[test]
    fn closed_station() {
        let json = SAMPLE.replace(r#""status": "OPEN""#, r#""status": "CLOSED""#);
        let dto: StationDto = serde_json::from_str(&json).unwrap();
        assert!(!StationStatus::from(dto).is_open);
    }

    #[test]
    fn converts_to_record() {
        let dto: StationDto = serde_json::from_str(SAMPLE).unwrap();
        let record = dto.to_record();
        assert_eq!(record.id, StationId::new(3051));
        assert_eq!(record.name, "3051 - PLACE HENRI");
        assert_eq!(record.position, dto.position);
    }

    #[test]
    fn parse_listing() {
        let listing = format!("[{SAMPLE}, {SAMPLE}]");
        let dtos: Vec<StationDto> = serde_json::from_str(&listing).unwrap();
        assert_eq!(dtos.len(), 2);
    }
}
