//! AQI service client.
//!
//! Retrieves the current air-quality sample for a coordinate pair from
//! the remote AQI API. One request covers one location; the fan-out over
//! the whole registry lives in `fetch`.
//!
//! Endpoint: `GET {base_url}/aqi?lat={lat}&lon={lon}`

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::model::SourceError;

// ---------------------------------------------------------------------------
// AQI API response structures
// ---------------------------------------------------------------------------

/// Top-level response for one location query.
#[derive(Debug, Clone, Deserialize)]
pub struct AqiResponse {
    pub data: AqiData,
    /// Health guidance block; older deployments of the service omit it.
    pub recommendations: Option<AdviceBlock>,
}

/// Raw measurement payload.
///
/// `aqi` is the ordinal severity code (1 best … 5 worst). The service
/// occasionally returns payloads without a code or without individual
/// pollutants; every field is therefore optional. Defaulting decisions
/// are made once, in `normalize`, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct AqiData {
    pub aqi: Option<i64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
}

/// Wire form of the recommendation block. Lists may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AdviceBlock {
    pub summary: Option<String>,
    pub actions: Option<Vec<String>>,
    pub avoid: Option<Vec<String>>,
    #[serde(rename = "atRisk")]
    pub at_risk: Option<Vec<String>>,
    pub alerts: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Metric source trait
// ---------------------------------------------------------------------------

/// The external metric collaborator: one call per monitored location.
///
/// The trait is the seam the orchestrator and tests plug into; the HTTP
/// implementation below is the production one. Futures are not required
/// to be `Send`; the whole pipeline runs on one cooperative thread.
#[async_trait(?Send)]
pub trait MetricSource {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<AqiResponse, SourceError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// `MetricSource` backed by the remote AQI API over HTTP.
///
/// Each request carries the client-level timeout, so a stuck query
/// becomes a `SourceError::Timeout` and the enclosing batch still
/// completes instead of stalling on one slow location.
pub struct HttpMetricSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMetricSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait(?Send)]
impl MetricSource for HttpMetricSource {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<AqiResponse, SourceError> {
        let url = format!("{}/aqi", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("lat", latitude), ("lon", longitude)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout
                } else {
                    SourceError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http(status.as_u16()));
        }

        response
            .json::<AqiResponse>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
