//! Address geocoding.
//!
//! Turns the address dictated by the user into candidate coordinates.
//! Only the first candidate is used by the resolver.

mod client;
mod error;
mod types;

pub use client::{GeocodeQuery, Geocoder, GeocodingConfig, GoogleGeocoder};
pub use error::GeocodingError;
pub use types::GeocodedLocation;
