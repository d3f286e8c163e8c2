//! HTTP client for the Nominatim-style geocoding search endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use jurimap_core::{Coordinate, SearchOrigin};

use crate::error::GeocodeError;
use crate::types::GeocodeMatch;

/// Client for a Nominatim-compatible geocoding service.
///
/// Restricted to a country scope per request and limited to the single best
/// match. Use [`GeocodeClient::new`] for production or point `base_url` at a
/// mock server in tests.
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a client with the given search endpoint, request timeout, and
    /// user agent.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves a free-text location query to its single best match within
    /// the given country scope.
    ///
    /// The caller must reject empty queries before calling.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NoMatch`] when the service finds nothing.
    /// - [`GeocodeError::Http`] / [`GeocodeError::UnexpectedStatus`] on
    ///   network failure or a non-200 response.
    /// - [`GeocodeError::Deserialize`] / [`GeocodeError::MalformedCoordinates`]
    ///   when the response does not match the expected shape.
    pub async fn resolve(
        &self,
        query: &str,
        country_codes: &str,
    ) -> Result<SearchOrigin, GeocodeError> {
        let url = self.build_url(query, country_codes);

        let response = self.client.get(url.clone()).send().await?;
        if response.status() != StatusCode::OK {
            return Err(GeocodeError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let matches: Vec<GeocodeMatch> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let Some(best) = matches.into_iter().next() else {
            return Err(GeocodeError::NoMatch {
                query: query.to_owned(),
            });
        };

        let coordinate = parse_coordinate(&best)?;
        tracing::debug!(query, display_name = %best.display_name, "geocoded location");

        Ok(SearchOrigin {
            coordinate,
            query: query.to_owned(),
            display_name: best.display_name,
        })
    }

    /// Builds the search URL with properly percent-encoded query parameters.
    fn build_url(&self, query: &str, country_codes: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("countrycodes", country_codes);
            pairs.append_pair("format", "jsonv2");
            pairs.append_pair("limit", "1");
        }
        url
    }
}

fn parse_coordinate(m: &GeocodeMatch) -> Result<Coordinate, GeocodeError> {
    let malformed = || GeocodeError::MalformedCoordinates {
        lat: m.lat.clone(),
        lon: m.lon.clone(),
    };
    let lat: f64 = m.lat.parse().map_err(|_| malformed())?;
    let lon: f64 = m.lon.parse().map_err(|_| malformed())?;
    Coordinate::new(lat, lon).map_err(|_| malformed())
}
