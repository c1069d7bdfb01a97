//! Geocoding error types.

/// Errors from the geocoding provider.
///
/// An address with no match is not an error: the provider answers with an
/// empty candidate list.
#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request reached the provider but was refused (bad key, quota)
    #[error("geocoding request rejected ({status}): {message}")]
    Rejected { status: String, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
