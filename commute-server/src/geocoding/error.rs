//! Geocoding gateway error types.

/// Errors from the mapping-provider HTTP client.
///
/// These never cross the gateway boundary: every public operation converts
/// them into fallback data or an empty result before returning.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status
    #[error("provider error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "provider error 502: Bad Gateway");

        let err = GeocodeError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
