//! Station provider error types.

/// Errors that can occur when talking to the station provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API key rejected
    #[error("unauthorized: check the JCDecaux API key")]
    Unauthorized,

    /// Station number unknown for this contract
    #[error("station {0} not found")]
    StationNotFound(u32),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = ProviderError::StationNotFound(3051);
        assert_eq!(err.to_string(), "station 3051 not found");

        let err = ProviderError::Json {
            message: "missing field `number`".into(),
        };
        assert!(err.to_string().contains("missing field"));
    }
}
