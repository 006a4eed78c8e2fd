//! Client for the habit backend's summary endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Development default; launchers override it via `HABITOS_API_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// One day of the yearly summary as the backend reports it. `date` is an
/// ISO-8601 string whose time-of-day component carries no meaning for the
/// year grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub id: String,
    pub date: String,
    pub amount: u32,
    pub completed: u32,
}

/// Why a summary fetch failed. The year screen collapses every variant into
/// one generic alert, but callers that want to discriminate can.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("summary request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("summary endpoint answered HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("summary response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Thin wrapper around a shared [`reqwest::Client`] pointed at one backend.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl SummaryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/summary`. No query parameters, headers, or pagination.
    pub async fn fetch_summary(&self) -> Result<Vec<DaySummary>, ApiError> {
        let url = format!("{}/summary", self.base_url);
        tracing::debug!(%url, "requesting habit summary");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        response
            .json::<Vec<DaySummary>>()
            .await
            .map_err(ApiError::Decode)
    }
}

impl Default for SummaryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
