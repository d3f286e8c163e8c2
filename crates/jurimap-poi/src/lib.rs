//! Client and normalization pipeline for the Overpass-style POI data source:
//! per-category spatial queries with bounded retry, and conversion of raw
//! heterogeneous place records into distance-filtered, sorted [`Place`]s.

mod client;
mod error;
mod normalize;
mod query;
mod types;

pub use client::{PoiClient, PoiClientConfig};
pub use error::PoiError;
pub use normalize::{normalize_places, Place};
pub use query::build_query;
pub use types::{CenterPoint, PoiResponse, RawPlaceRecord, TagMap};
