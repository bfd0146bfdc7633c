use thiserror::Error;

/// Fatal errors from the NPS API client. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum NpsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("error loading {url}: HTTP status {status}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body is not valid JSON.
    #[error("unable to parse JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body is JSON but not the `{ "total": .., "data": [..] }` envelope.
    #[error("unexpected response from {url}: {reason}")]
    Protocol { url: String, reason: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Why a single raw record could not become a [`parkmap_core::Site`].
///
/// Never fatal: the record is dropped and the run continues.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Missing required field or wrong JSON type.
    #[error("schema error: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("invalid URL in {field} ({value:?}): {reason}")]
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },

    #[error("invalid coordinate in {field}: {value:?} is not a finite number")]
    InvalidCoordinate { field: String, value: String },
}
