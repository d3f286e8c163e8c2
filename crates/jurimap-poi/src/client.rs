//! HTTP client for the Overpass-style POI interpreter endpoint.
//!
//! One call per category: a combined node/way query POSTed as the `data`
//! form field, with bounded retry on transient failure (429 and request
//! timeout). Anything else fails fast with a typed error; the aggregator
//! decides how to degrade.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use jurimap_core::Coordinate;

use crate::error::PoiError;
use crate::query::build_query;
use crate::types::{PoiResponse, RawPlaceRecord};

/// Construction parameters for [`PoiClient`].
#[derive(Debug, Clone)]
pub struct PoiClientConfig {
    pub base_url: String,
    /// Client-side timeout per query attempt.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Total attempts per category query, first try included.
    pub max_retries: u32,
    /// Base unit for retry sleeps: 429 waits 2× this, a timeout waits 1×.
    /// Set to `0` in tests to retry without sleeping.
    pub backoff_base_secs: u64,
    /// Server-side `[timeout:]`; keep below `timeout_secs`.
    pub server_timeout_secs: u64,
    /// Upstream response cap (`out body center N`).
    pub max_results: u32,
}

/// Client for an Overpass-compatible POI interpreter.
pub struct PoiClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_secs: u64,
    server_timeout_secs: u64,
    max_results: u32,
}

impl PoiClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`PoiError::InvalidBaseUrl`] if the base URL does
    /// not parse.
    pub fn new(config: &PoiClientConfig) -> Result<Self, PoiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| PoiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries.max(1),
            backoff_base_secs: config.backoff_base_secs,
            server_timeout_secs: config.server_timeout_secs,
            max_results: config.max_results,
        })
    }

    /// Runs one category's spatial query and returns the raw matched records.
    ///
    /// Retry policy:
    /// - HTTP 429 — sleep `2 × backoff_base_secs`, retry, until attempts are
    ///   exhausted, then [`PoiError::RateLimited`].
    /// - Request timeout — sleep `backoff_base_secs`, retry, until attempts
    ///   are exhausted, then [`PoiError::Http`].
    /// - Any other non-200 status or a malformed body — fail immediately,
    ///   no retry.
    ///
    /// # Errors
    ///
    /// See retry policy above; also [`PoiError::Http`] on network failure.
    pub async fn query_category(
        &self,
        origin: Coordinate,
        radius_km: f64,
        tags: &[String],
    ) -> Result<Vec<RawPlaceRecord>, PoiError> {
        let query = build_query(
            origin,
            radius_km,
            tags,
            self.server_timeout_secs,
            self.max_results,
        );

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let err = match self.execute(&query).await {
                Ok(records) => return Ok(records),
                Err(err) => err,
            };

            if attempt >= self.max_retries {
                return Err(err);
            }

            match &err {
                PoiError::RateLimited => {
                    let delay_secs = self.backoff_base_secs.saturating_mul(2);
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_secs,
                        "POI service rate limited — retrying after backoff"
                    );
                    tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                }
                PoiError::Http(e) if e.is_timeout() => {
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_secs = self.backoff_base_secs,
                        "POI query timed out — retrying after backoff"
                    );
                    tokio::time::sleep(Duration::from_secs(self.backoff_base_secs)).await;
                }
                _ => return Err(err),
            }
        }
    }

    async fn execute(&self, query: &str) -> Result<Vec<RawPlaceRecord>, PoiError> {
        let response = self
            .client
            .post(self.base_url.clone())
            .form(&[("data", query)])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let parsed: PoiResponse =
                    serde_json::from_str(&body).map_err(|e| PoiError::Deserialize {
                        context: self.base_url.to_string(),
                        source: e,
                    })?;
                Ok(parsed.elements)
            }
            StatusCode::TOO_MANY_REQUESTS => Err(PoiError::RateLimited),
            status => Err(PoiError::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}
