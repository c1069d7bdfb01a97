//! Resolution failures and their spoken messages.

use crate::aggregate::AggregateError;
use crate::directory::{DirectoryError, RefreshError};
use crate::geocoding::GeocodingError;
use crate::jcdecaux::ProviderError;

/// Why a resolution stopped. Every variant is terminal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Contract or API keys missing
    #[error("configuration incomplete, missing: {}", missing.join(", "))]
    ConfigIncomplete { missing: Vec<&'static str> },

    /// Default mode without a default address or station
    #[error("no default address or station configured")]
    NoDefaultConfigured,

    /// The dictation did not match the expected phrase
    #[error("unrecognized input: {0:?}")]
    UnrecognizedInput(String),

    /// The geocoder found no location for the address
    #[error("address not found: {0}")]
    AddressNotFound(String),

    /// The cached station list could not be read or written
    #[error(transparent)]
    DirectoryUnavailable(#[from] DirectoryError),

    /// A remote provider call failed
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The address was found but no station was selected
    #[error("no station near the address")]
    NoCandidates,
}

impl ResolveError {
    /// Sentence spoken to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResolveError::ConfigIncomplete { .. } => {
                "Sorry, my configuration does not let me look up bike stations."
            }
            ResolveError::NoDefaultConfigured => {
                "Please configure a default address or station number."
            }
            ResolveError::UnrecognizedInput(_) => "I don't understand.",
            ResolveError::AddressNotFound(_) => "I can't find that address.",
            ResolveError::DirectoryUnavailable(_) => "I can't read the station list.",
            ResolveError::ProviderUnavailable(_) => "I can't reach the bike service.",
            ResolveError::NoCandidates => "I can't find any station near that address.",
        }
    }
}

impl From<AggregateError> for ResolveError {
    fn from(err: AggregateError) -> Self {
        ResolveError::ProviderUnavailable(err.to_string())
    }
}

impl From<ProviderError> for ResolveError {
    fn from(err: ProviderError) -> Self {
        ResolveError::ProviderUnavailable(err.to_string())
    }
}

impl From<GeocodingError> for ResolveError {
    fn from(err: GeocodingError) -> Self {
        ResolveError::ProviderUnavailable(format!("geocoding: {err}"))
    }
}

impl From<RefreshError> for ResolveError {
    fn from(err: RefreshError) -> Self {
        match err {
            RefreshError::Provider(e) => e.into(),
            RefreshError::Store(e) => e.into(),
        }
    }
}
