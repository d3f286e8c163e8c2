use thiserror::Error;

/// Errors returned by the geocoder adapter.
///
/// Every variant means the same thing to the caller — the location could not
/// be resolved — but the distinction is kept for logging and tests.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from geocoding service")]
    UnexpectedStatus { status: u16 },

    /// The service returned an empty match list for the query.
    #[error("no geocoding match for \"{query}\"")]
    NoMatch { query: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The best match carried coordinates that do not parse or are out of
    /// range.
    #[error("malformed coordinates in geocoding match: lat={lat} lon={lon}")]
    MalformedCoordinates { lat: String, lon: String },

    #[error("invalid geocoder base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
