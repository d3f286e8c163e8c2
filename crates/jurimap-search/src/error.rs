use thiserror::Error;

/// User-facing search failures.
///
/// These are the only ways a search can fail outright; once geocoding
/// succeeds, upstream trouble degrades to fewer results instead of an error.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location query must not be empty")]
    EmptyQuery,

    /// Geocoding failed — no match, or the geocoding service was
    /// unreachable. The message is meant for direct display.
    #[error(
        "could not find a location for \"{query}\"; try a full address, a city name, or a postal code"
    )]
    LocationNotFound { query: String },

    #[error("search radius must be between 0 and {max_radius_km} km, got {radius_km}")]
    InvalidRadius { radius_km: f64, max_radius_km: f64 },
}
