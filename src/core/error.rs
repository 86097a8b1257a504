use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Transport and parse failures both carry the URL that was attempted, so a
/// caller juggling several concurrent requests can tell which one failed.
/// Service-level failures (`"Response": "Error"` in the body) are *not* an
/// error here: the document resolves normally and the caller inspects it.
#[derive(Debug, Error)]
pub enum CcError {
    /// The connection could not be established or the response body could
    /// not be read to completion. Never retried by the crate.
    #[error("transport error for {url}: {source}")]
    Transport {
        /// The URL that was attempted.
        url: String,
        /// The underlying reqwest failure.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Json {
        /// The URL that was attempted.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A base-URL override provided to the builder could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
