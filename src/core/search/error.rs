//! Search error types.

use thiserror::Error;

/// Failures while talking to the word-lookup service.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never completed (connectivity, DNS, timeout).
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered outside the 2xx range.
    #[error("search service returned HTTP {status}")]
    Service { status: u16 },

    #[error("invalid search service URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
