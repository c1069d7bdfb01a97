//! JCDecaux VLS HTTP client.
//!
//! Serves both the single-station status endpoint used on every resolution
//! and the full listing used to refresh the cached directory.

use tracing::debug;

use crate::aggregate::{ProviderScope, StatusProvider};
use crate::directory::StationSource;
use crate::domain::{StationId, StationRecord, StationStatus};

use super::error::ProviderError;
use super::types::StationDto;

/// Default base URL for the JCDecaux VLS v1 API.
const DEFAULT_BASE_URL: &str = "https://api.jcdecaux.com/vls/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the JCDecaux client.
///
/// Credentials are not part of the client: they travel with each request
/// in a [`ProviderScope`].
#[derive(Debug, Clone)]
pub struct JcDecauxConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl JcDecauxConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
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

impl Default for JcDecauxConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the JCDecaux station API.
#[derive(Debug, Clone)]
pub struct JcDecauxClient {
    http: reqwest::Client,
    base_url: String,
}

impl JcDecauxClient {
    /// Create a new JCDecaux client.
    pub fn new(config: JcDecauxConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one station, including its live counters.
    pub async fn get_station(
        &self,
        station: StationId,
        scope: &ProviderScope<'_>,
    ) -> Result<StationDto, ProviderError> {
        let url = format!("{}/stations/{}", self.base_url, station.number());
        let response = self
            .http
            .get(&url)
            .query(&[("contract", scope.contract), ("apiKey", scope.api_key)])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::StationNotFound(station.number()));
        }

        let body = read_body(response, status).await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
        })
    }

    /// Fetch every station of the contract.
    pub async fn get_all_stations(
        &self,
        scope: &ProviderScope<'_>,
    ) -> Result<Vec<StationDto>, ProviderError> {
        let url = format!("{}/stations", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("contract", scope.contract), ("apiKey", scope.api_key)])
            .send()
            .await?;

        let status = response.status();
        let body = read_body(response, status).await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
        })
    }
}

/// Map error statuses, then read the body of a successful response.
async fn read_body(
    response: reqwest::Response,
    status: reqwest::StatusCode,
) -> Result<String, ProviderError> {
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ProviderError::Unauthorized);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

impl StatusProvider for JcDecauxClient {
    async fn fetch_status(
        &self,
        station: StationId,
        scope: &ProviderScope<'_>,
    ) -> Result<StationStatus, ProviderError> {
        let dto = self.get_station(station, scope).await?;
        Ok(StationStatus::from(dto))
    }
}

impl StationSource for JcDecauxClient {
    async fn fetch_all(
        &self,
        scope: &ProviderScope<'_>,
    ) -> Result<Vec<StationRecord>, ProviderError> {
        let dtos = self.get_all_stations(scope).await?;
        debug!(contract = scope.contract, stations = dtos.len(), "Fetched station listing");
        Ok(dtos.iter().map(StationDto::to_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = JcDecauxConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = JcDecauxConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_timeout(3);
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client =
            JcDecauxClient::new(JcDecauxConfig::new().with_base_url("http://localhost:8080/"))
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let client = JcDecauxClient::new(
            JcDecauxConfig::new()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();
        let scope = ProviderScope {
            contract: "Lyon",
            api_key: "k",
        };

        let result = client.fetch_status(StationId::new(1), &scope).await;
        assert!(matches!(result, Err(ProviderError::Http(_))));
    }
}
