//! Error types for metadata retrieval

use thiserror::Error;

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failure to retrieve page content.
///
/// This is the only error extraction can surface: once content is in
/// hand, every field falls back to a default instead of failing.
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL could not be parsed or uses an unsupported scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured wait
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Server answered with a non-success status
    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },

    /// Body exceeded the configured cap
    #[error("Content too large: {size} bytes exceeds max {max} bytes")]
    BodyTooLarge { size: usize, max: usize },

    /// Server answered but sent nothing to extract from
    #[error("Empty response body from {0}")]
    EmptyBody(String),
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}
