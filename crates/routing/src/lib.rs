//! Live travel distance via the Google Distance Matrix API.
//!
//! [`DistanceMatrixClient`] implements [`DistanceResolver`] with a single
//! GET per call: no retries, no caching, and an explicit request timeout.

pub mod matrix;

use std::time::Duration;

use async_trait::async_trait;
use mudae_core::distance::DistanceResolver;
use mudae_core::error::CoreError;
use mudae_core::profile::Address;

pub use matrix::MatrixResponse;

/// Default Distance Matrix endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Default timeout for one outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for routing provider failures.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    ///
    /// Built through [`RoutingError::request`] so the request URL, which
    /// carries the API key, never reaches the message.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The provider answered with a status other than 200.
    #[error("Routing provider returned HTTP {0}")]
    HttpStatus(u16),

    /// The body could not be decoded or carried no usable route.
    #[error("Malformed routing response: {0}")]
    Malformed(String),
}

impl RoutingError {
    fn request(err: reqwest::Error) -> Self {
        RoutingError::Request(err.without_url())
    }
}

impl From<RoutingError> for CoreError {
    fn from(err: RoutingError) -> Self {
        CoreError::Dependency(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Connection settings for the routing provider.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl RoutingConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct DistanceMatrixClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DistanceMatrixClient {
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RoutingError::request)?;
        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch the driving distance in whole kilometres (truncated).
    pub async fn distance_km(&self, from: &Address, to: &Address) -> Result<f64, RoutingError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origins", coordinates(from)),
                ("destinations", coordinates(to)),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(RoutingError::request)?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(RoutingError::HttpStatus(response.status().as_u16()));
        }

        let body = response.bytes().await.map_err(RoutingError::request)?;
        let parsed: MatrixResponse = serde_json::from_slice(&body)
            .map_err(|e| RoutingError::Malformed(e.to_string()))?;
        let meters = parsed.first_distance_meters()?;
        Ok((meters / 1000) as f64)
    }
}

#[async_trait]
impl DistanceResolver for DistanceMatrixClient {
    async fn resolve(&self, from: &Address, to: &Address) -> Result<f64, CoreError> {
        match self.distance_km(from, to).await {
            Ok(km) => {
                tracing::debug!(km, "Resolved travel distance");
                Ok(km)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Distance resolution failed");
                Err(e.into())
            }
        }
    }
}

/// Render an address as the provider's `lat,lon` pair.
fn coordinates(address: &Address) -> String {
    format!("{},{}", address.latitude, address.longitude)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
