//! Wire types for the Overpass-style POI interpreter response.
//!
//! The interpreter returns `{"elements": [...]}` where each element is either
//! a point feature carrying `lat`/`lon` directly or an area feature carrying
//! them under a nested `center` object. Tags are an open-ended string map of
//! arbitrary shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level interpreter response envelope.
#[derive(Debug, Deserialize)]
pub struct PoiResponse {
    #[serde(default)]
    pub elements: Vec<RawPlaceRecord>,
}

/// Center point attached to area features (`out center`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CenterPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One unnormalized element from a category query.
///
/// Every field is optional on the wire; records missing both direct
/// coordinates and a center are dropped during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlaceRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<CenterPoint>,
    #[serde(default)]
    pub tags: TagMap,
}

/// The open-ended tag mapping of a place record.
///
/// Field resolution policy lives in [`TagMap::first_of`]: an ordered list of
/// candidate keys where the first present, non-empty value wins. This keeps
/// the normalizer's fallback chains declarative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap(HashMap<String, String>);

impl TagMap {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value of the first key in `keys` that is present with a
    /// non-empty value.
    #[must_use]
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.get(key).filter(|v| !v.is_empty()))
    }
}

impl FromIterator<(String, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for TagMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}
