//! Top-level search service: validate input, geocode, aggregate.

use jurimap_core::ServiceCategory;
use jurimap_geocode::GeocodeClient;

use crate::aggregator::Aggregator;
use crate::error::SearchError;
use crate::result::SearchResult;

/// Owns the pipeline's clients and configuration and runs complete searches.
pub struct SearchService {
    geocode: GeocodeClient,
    aggregator: Aggregator,
    categories: Vec<ServiceCategory>,
    country_codes: String,
    default_radius_km: f64,
    max_radius_km: f64,
}

impl SearchService {
    #[must_use]
    pub fn new(
        geocode: GeocodeClient,
        aggregator: Aggregator,
        categories: Vec<ServiceCategory>,
        country_codes: String,
        default_radius_km: f64,
        max_radius_km: f64,
    ) -> Self {
        Self {
            geocode,
            aggregator,
            categories,
            country_codes,
            default_radius_km,
            max_radius_km,
        }
    }

    /// The configured category registry, in query order.
    #[must_use]
    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    /// Runs one complete search: geocode the query, then query and
    /// normalize every category around the match.
    ///
    /// A missing `radius_km` falls back to the configured default.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for a blank location query.
    /// - [`SearchError::InvalidRadius`] for a non-positive or over-limit
    ///   radius.
    /// - [`SearchError::LocationNotFound`] when geocoding fails for any
    ///   reason; no category query is issued in that case.
    pub async fn run(
        &self,
        query: &str,
        radius_km: Option<f64>,
    ) -> Result<SearchResult, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let radius_km = radius_km.unwrap_or(self.default_radius_km);
        if !(radius_km > 0.0) || radius_km > self.max_radius_km {
            return Err(SearchError::InvalidRadius {
                radius_km,
                max_radius_km: self.max_radius_km,
            });
        }

        let origin = self
            .geocode
            .resolve(query, &self.country_codes)
            .await
            .map_err(|err| {
                tracing::warn!(query, error = %err, "geocoding failed");
                SearchError::LocationNotFound {
                    query: query.to_owned(),
                }
            })?;

        tracing::info!(
            query,
            display_name = %origin.display_name,
            radius_km,
            "starting category queries"
        );

        Ok(self
            .aggregator
            .search(&origin, radius_km, &self.categories)
            .await)
    }
}
