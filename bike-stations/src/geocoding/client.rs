//! Google Geocoding HTTP client.

use std::future::Future;

use tracing::debug;

use super::error::GeocodingError;
use super::types::{GeocodeResponse, GeocodedLocation};

/// Default endpoint for the Google Geocoding JSON API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Status returned when the request succeeded but nothing matched.
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// A free-text address lookup.
#[derive(Debug, Clone, Copy)]
pub struct GeocodeQuery<'a> {
    pub address: &'a str,
    /// Country qualifier appended to the address, e.g. `FR`.
    pub country: &'a str,
    pub api_key: &'a str,
}

impl GeocodeQuery<'_> {
    /// The address text sent to the provider.
    pub fn qualified_address(&self) -> String {
        if self.country.is_empty() {
            self.address.to_string()
        } else {
            format!("{}, {}", self.address, self.country)
        }
    }
}

/// Resolves free-text addresses to candidate locations.
///
/// An empty candidate list means "not found" and is not an error.
pub trait Geocoder {
    fn geocode(
        &self,
        query: &GeocodeQuery<'_>,
    ) -> impl Future<Output = Result<Vec<GeocodedLocation>, GeocodingError>> + Send;
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodingConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Google Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleGeocoder {
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl Geocoder for GoogleGeocoder {
    async fn geocode(
        &self,
        query: &GeocodeQuery<'_>,
    ) -> Result<Vec<GeocodedLocation>, GeocodingError> {
        let address = query.qualified_address();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("address", address.as_str()), ("key", query.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodingError::Json {
                message: e.to_string(),
            })?;

        let candidates = interpret(parsed)?;
        debug!(address = %address, candidates = candidates.len(), "Geocoded address");
        Ok(candidates)
    }
}

/// Turn a parsed response into candidates, treating `ZERO_RESULTS` as an
/// empty answer and any other non-`OK` status as a rejection.
fn interpret(response: GeocodeResponse) -> Result<Vec<GeocodedLocation>, GeocodingError> {
    match response.status.as_str() {
        "OK" | STATUS_ZERO_RESULTS => Ok(response
            .results
            .into_iter()
            .map(GeocodedLocation::from)
            .collect()),
        _ => Err(GeocodingError::Rejected {
            message: response.error_message.unwrap_or_default(),
            status: response.status,
        }),
    }
}
