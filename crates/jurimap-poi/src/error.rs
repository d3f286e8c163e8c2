use thiserror::Error;

/// Errors returned by the POI query client.
///
/// A category query failure is never fatal to a search: the aggregator
/// downgrades any of these to an empty, failure-flagged category.
#[derive(Debug, Error)]
pub enum PoiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429 after all attempts were exhausted.
    #[error("rate limited by POI service (HTTP 429)")]
    RateLimited,

    #[error("unexpected HTTP status {status} from POI service")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid POI base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
