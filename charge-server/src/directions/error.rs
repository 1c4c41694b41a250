//! Directions client error types.

/// Errors from the directions provider.
///
/// None of these reach the caller of the planner: each one selects the
/// simulated-route fallback.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed for a reason other than timeout or connection
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request timed out
    #[error("request timed out")]
    Timeout,

    /// Could not connect to the provider
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    /// Non-success HTTP status code
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Provider answered with a non-OK logical status
    #[error("provider status {status}: {message}")]
    Status { status: String, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// OK status but no routes in the response
    #[error("provider returned no routes")]
    NoRoutes,

    /// No API key configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DirectionsError::Timeout
        } else if err.is_connect() {
            DirectionsError::Unreachable(err.to_string())
        } else {
            DirectionsError::Http(err)
        }
    }
}
