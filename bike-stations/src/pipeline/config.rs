//! Per-invocation configuration.

use serde::Deserialize;

use crate::aggregate::ProviderScope;
use crate::domain::StationId;
use crate::geocoding::GeocodeQuery;

use super::error::ResolveError;

/// Country qualifier used when none is configured.
pub const DEFAULT_COUNTRY: &str = "FR";

/// Configuration handed over by the host with every command.
///
/// All fields are optional here; [`ResolverConfig::validate`] checks that
/// the required ones are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolverConfig {
    /// Operator contract (city), e.g. `Lyon`.
    pub contract: Option<String>,

    /// JCDecaux API key.
    pub status_api_key: Option<String>,

    /// Google Geocoding API key.
    pub geocoding_api_key: Option<String>,

    /// Address used when the command carries none.
    pub default_address: Option<String>,

    /// Station used when the command carries none. Takes precedence over
    /// `default_address`.
    pub default_station: Option<StationId>,

    /// Country qualifier appended to geocoding queries.
    pub country: Option<String>,
}

impl ResolverConfig {
    /// Create a configuration with the three required settings.
    pub fn new(
        contract: impl Into<String>,
        status_api_key: impl Into<String>,
        geocoding_api_key: impl Into<String>,
    ) -> Self {
        Self {
            contract: Some(contract.into()),
            status_api_key: Some(status_api_key.into()),
            geocoding_api_key: Some(geocoding_api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_default_address(mut self, address: impl Into<String>) -> Self {
        self.default_address = Some(address.into());
        self
    }

    pub fn with_default_station(mut self, station: StationId) -> Self {
        self.default_station = Some(station);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Check that the contract and both API keys are present and non-blank.
    pub fn validate(&self) -> Result<ValidConfig, ResolveError> {
        let mut missing = Vec::new();

        let contract = required(&self.contract, "contract", &mut missing);
        let status_api_key = required(&self.status_api_key, "status_api_key", &mut missing);
        let geocoding_api_key =
            required(&self.geocoding_api_key, "geocoding_api_key", &mut missing);

        match (contract, status_api_key, geocoding_api_key) {
            (Some(contract), Some(status_api_key), Some(geocoding_api_key)) => Ok(ValidConfig {
                contract,
                status_api_key,
                geocoding_api_key,
                country: self
                    .country
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .unwrap_or(DEFAULT_COUNTRY)
                    .to_string(),
                default_address: non_blank(&self.default_address),
                default_station: self.default_station,
            }),
            _ => Err(ResolveError::ConfigIncomplete { missing }),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required(
    value: &Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = non_blank(value);
    if value.is_none() {
        missing.push(name);
    }
    value
}

/// A configuration whose required settings are known to be present.
#[derive(Debug, Clone)]
pub struct ValidConfig {
    pub contract: String,
    pub status_api_key: String,
    pub geocoding_api_key: String,
    pub country: String,
    pub default_address: Option<String>,
    pub default_station: Option<StationId>,
}

impl ValidConfig {
    /// Scope for station provider calls.
    pub fn provider_scope(&self) -> ProviderScope<'_> {
        ProviderScope {
            contract: &self.contract,
            api_key: &self.status_api_key,
        }
    }

    /// Geocoding query for `address`.
    pub fn geocode_query<'a>(&'a self, address: &'a str) -> GeocodeQuery<'a> {
        GeocodeQuery {
            address,
            country: &self.country,
            api_key: &self.geocoding_api_key,
        }
    }
}
