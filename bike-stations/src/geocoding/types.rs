//! Google Geocoding API response DTOs.

use serde::Deserialize;

use crate::domain::Coordinate;

/// Top-level geocoding response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// `OK`, `ZERO_RESULTS`, or an error code such as `REQUEST_DENIED`.
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Coordinate,
}

/// A location candidate for a free-text address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub position: Coordinate,
    /// Provider's canonical form of the address, when given.
    pub formatted_address: Option<String>,
}

impl From<GeocodeResult> for GeocodedLocation {
    fn from(result: GeocodeResult) -> Self {
        Self {
            position: result.geometry.location,
            formatted_address: result.formatted_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ok_response() {
        let json = r#"{
            "results": [{
                "formatted_address": "145 Avenue Lacassagne, 69003 Lyon, France",
                "geometry": {
                    "location": { "lat": 45.7489, "lng": 4.8801 },
                    "location_type": "ROOFTOP"
                },
                "place_id": "abc"
            }],
            "status": "OK"
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "OK");
        assert_eq!(response.results.len(), 1);

        let location = GeocodedLocation::from(response.results.into_iter().next().unwrap());
        assert_eq!(location.position, Coordinate::new(45.7489, 4.8801).unwrap());
        assert!(location.formatted_address.unwrap().contains("Lacassagne"));
    }

    #[test]
    fn parse_zero_results() {
        let json = r#"{"results": [], "status": "ZERO_RESULTS"}"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
        assert!(response.error_message.is_none());
    }

    #[test]
    fn parse_denied_without_results_field() {
        let json = r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.error_message.as_deref(), Some("bad key"));
    }
}
