//! Error types for the suggestion request path
//!
//! Shape mismatches in an upstream payload are not errors: parsers return an
//! empty list for them. Everything here is a real failure the caller reports.

/// Errors raised while fetching suggestions from a source
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    /// Upstream answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Connection, DNS or socket failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body could not be decoded as JSON where the source requires it
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured endpoint is not a valid URL
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    /// Source name that does not map to any backend
    #[error("Unknown source: {0}")]
    UnknownSource(String),
}

/// Result alias for the request path
pub type Result<T> = std::result::Result<T, AutocompleteError>;
