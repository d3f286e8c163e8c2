use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jurimap_core::{IconDescriptor, SearchOrigin};
use jurimap_poi::Place;

/// Whether a category's upstream query ran to completion.
///
/// A failed query is reported distinctly from "queried fine, zero matches
/// nearby", even though both render as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryOutcome {
    Succeeded,
    Failed { reason: String },
}

/// One category's slice of a search result: ordered places plus the query
/// outcome and the category's presentation hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: String,
    pub icon: IconDescriptor,
    /// Ascending by distance; empty on zero matches or query failure.
    pub places: Vec<Place>,
    pub outcome: CategoryOutcome,
}

/// The complete, self-contained outcome of one search submission.
///
/// Every requested category appears in `categories`, in declared order,
/// whether or not it produced matches. Built fresh per submission and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: Uuid,
    pub origin: SearchOrigin,
    pub radius_km: f64,
    pub categories: Vec<CategoryResult>,
    /// Sum of place counts across all categories.
    pub total_found: usize,
    pub searched_at: DateTime<Utc>,
}

impl SearchResult {
    /// Looks up one category's slice by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.category == name)
    }
}
