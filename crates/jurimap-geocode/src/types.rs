use serde::Deserialize;

/// A single match from the geocoding service's search endpoint.
///
/// Nominatim returns `lat`/`lon` as JSON strings, not numbers; they are
/// parsed and range-checked when converted to a coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeMatch {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}
