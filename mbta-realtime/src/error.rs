//! Client error types.

/// Errors from the MBTA realtime client.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// API returned a status other than 200
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Caller passed a value of the wrong shape
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing or unreadable credentials, or an unusable base URL
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MbtaError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string.
        MbtaError::Http(err.without_url())
    }
}
