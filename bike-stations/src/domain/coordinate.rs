//! Geographic coordinates and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for distance computations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when building a coordinate outside the valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinate {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A WGS84 position in decimal degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Both are finite. This type guarantees that by construction, including
/// when deserialized from a station listing or a geocoding response.
///
/// # Examples
///
/// ```
/// use bike_stations::domain::Coordinate;
///
/// let bellecour = Coordinate::new(45.7578, 4.8320).unwrap();
/// assert_eq!(bellecour.lat(), 45.7578);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

/// Wire shape shared by the station listing and the geocoder: `{lat, lng}`.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawPosition {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Build a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        let fail = |reason| InvalidCoordinate { lat, lng, reason };

        if !lat.is_finite() || !lng.is_finite() {
            return Err(fail("must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(fail("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(fail("longitude must be within [-180, 180]"));
        }

        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        distance_km(self, other)
    }
}

impl TryFrom<RawPosition> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl From<Coordinate> for RawPosition {
    fn from(c: Coordinate) -> Self {
        RawPosition {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Uses the spherical law of cosines. Rounding can push the cosine term
/// slightly outside [-1, 1] for (nearly) identical or antipodal points, so
/// it is clamped before `acos`.
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let cos_angle = lat_a.cos() * lat_b.cos() * delta_lng.cos() + lat_a.sin() * lat_b.sin();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(90.0001, 0.0).is_err());
        assert!(Coordinate::new(-91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_display() {
        let err = Coordinate::new(100.0, 4.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate (100, 4): latitude must be within [-90, 90]"
        );
    }

    #[test]
    fn identical_points_are_zero_apart() {
        let p = coord(45.7578, 4.8320);
        let d = distance_km(&p, &p);
        assert!(!d.is_nan());
        // acos near 1 loses precision; a metre is well within tolerance.
        assert!(d.abs() < 1e-3, "got {d}");
    }

    #[test]
    fn known_distance_lyon_paris() {
        // Place Bellecour to Notre-Dame de Paris is roughly 392 km.
        let lyon = coord(45.7578, 4.8320);
        let paris = coord(48.8530, 2.3499);
        let d = distance_km(&lyon, &paris);
        assert!((d - 392.0).abs() < 3.0, "got {d}");
    }

    #[test]
    fn quarter_meridian() {
        let equator = coord(0.0, 0.0);
        let pole = coord(90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance_km(&equator, &pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        let d = distance_km(&a, &b);
        assert!((d - expected).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn method_matches_function() {
        let a = coord(45.75, 4.85);
        let b = coord(45.76, 4.90);
        assert_eq!(a.distance_km(&b), distance_km(&a, &b));
    }

    #[test]
    fn deserializes_lat_lng_object() {
        let c: Coordinate =
            serde_json::from_str(r#"{"lat": 45.748193, "lng": 4.880641}"#).unwrap();
        assert_eq!(c, coord(45.748193, 4.880641));
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let result: Result<Coordinate, _> =
            serde_json::from_str(r#"{"lat": 145.0, "lng": 4.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn display_and_debug() {
        let c = coord(45.75, 4.85);
        assert_eq!(c.to_string(), "45.750000,4.850000");
        assert_eq!(format!("{c:?}"), "Coordinate(45.75, 4.85)");
    }
}
