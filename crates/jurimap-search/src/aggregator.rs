//! The per-category aggregation loop.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use jurimap_core::{SearchOrigin, ServiceCategory};
use jurimap_poi::{normalize_places, PoiClient};

use crate::result::{CategoryOutcome, CategoryResult, SearchResult};

/// Runs the category queries for one search submission and assembles the
/// [`SearchResult`].
///
/// Categories are queried strictly sequentially in declared order, with a
/// deliberate delay between consecutive queries so a burst of category
/// queries does not trip upstream rate limiting. A category whose query
/// fails contributes an empty, failure-flagged entry — it never aborts the
/// search. Stateless and side-effect-free per call.
pub struct Aggregator {
    poi: PoiClient,
    inter_category_delay: Duration,
}

impl Aggregator {
    #[must_use]
    pub fn new(poi: PoiClient, inter_category_delay_ms: u64) -> Self {
        Self {
            poi,
            inter_category_delay: Duration::from_millis(inter_category_delay_ms),
        }
    }

    /// Queries and normalizes every category around `origin`.
    ///
    /// Deterministic given identical upstream data: same origin, radius,
    /// and category order produce the same output ordering.
    pub async fn search(
        &self,
        origin: &SearchOrigin,
        radius_km: f64,
        categories: &[ServiceCategory],
    ) -> SearchResult {
        let mut results = Vec::with_capacity(categories.len());
        let mut total_found = 0usize;

        for (index, category) in categories.iter().enumerate() {
            if index > 0 && !self.inter_category_delay.is_zero() {
                tokio::time::sleep(self.inter_category_delay).await;
            }

            let (places, outcome) = match self
                .poi
                .query_category(origin.coordinate, radius_km, &category.tags)
                .await
            {
                Ok(records) => {
                    let places = normalize_places(&records, origin.coordinate, radius_km);
                    tracing::debug!(
                        category = %category.name,
                        raw = records.len(),
                        kept = places.len(),
                        "category query complete"
                    );
                    (places, CategoryOutcome::Succeeded)
                }
                Err(err) => {
                    tracing::warn!(
                        category = %category.name,
                        error = %err,
                        "category query failed — continuing with empty result"
                    );
                    (
                        Vec::new(),
                        CategoryOutcome::Failed {
                            reason: err.to_string(),
                        },
                    )
                }
            };

            total_found += places.len();
            results.push(CategoryResult {
                category: category.name.clone(),
                icon: category.icon.clone(),
                places,
                outcome,
            });
        }

        SearchResult {
            id: Uuid::new_v4(),
            origin: origin.clone(),
            radius_km,
            categories: results,
            total_found,
            searched_at: Utc::now(),
        }
    }
}
