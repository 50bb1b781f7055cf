//! Ryanair HTTP client.
//!
//! Provides async methods for the route catalogue and monthly schedule
//! endpoints, and adapts them to the search engine's [`FlightApi`] trait.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::{Iata, MonthSchedule, Route, YearMonth};
use crate::search::{FlightApi, SearchError};

use super::error::ApiError;
use super::types::RouteRecord;

/// Default base URL for the Ryanair services API.
const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Ryanair client.
#[derive(Debug, Clone)]
pub struct RyanairConfig {
    /// Base URL for the API (defaults to the production host)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RyanairConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RyanairConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ryanair API client.
///
/// One month of one city pair per schedule request; the engine fans
/// these out, so a semaphore limits concurrent requests to avoid rate
/// limiting.
#[derive(Debug, Clone)]
pub struct RyanairClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RyanairClient {
    /// Create a new Ryanair client with the given configuration.
    pub fn new(config: RyanairConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get the full route catalogue.
    pub async fn routes(&self) -> Result<Vec<RouteRecord>, ApiError> {
        let url = format!("{}/views/locate/3/routes", self.base_url);
        let body = self.fetch(&url).await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Get one month of schedules for one city pair.
    pub async fn schedule(
        &self,
        origin: &Iata,
        destination: &Iata,
        month: YearMonth,
    ) -> Result<MonthSchedule, ApiError> {
        let url = format!(
            "{}/timtbl/3/schedules/{}/{}/years/{}/months/{}",
            self.base_url,
            origin,
            destination,
            month.year(),
            month.month()
        );
        let body = self.fetch(&url).await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// GET a URL under the semaphore and return the response body.
    async fn fetch(&self, url: &str) -> Result<String, ApiError> {
        let _permit = self.semaphore.acquire().await.map_err(|_| ApiError::Status {
            status: 0,
            message: "Semaphore closed".to_string(),
        })?;

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

impl FlightApi for RyanairClient {
    async fn fetch_routes(&self) -> Result<Vec<Route>, SearchError> {
        let records = self.routes().await.map_err(upstream)?;

        // A malformed row drops that row, not the whole catalogue.
        Ok(records
            .iter()
            .filter_map(|record| match record.to_route() {
                Ok(route) => Some(route),
                Err(error) => {
                    tracing::warn!(
                        from = %record.airport_from,
                        to = %record.airport_to,
                        %error,
                        "dropping malformed catalogue row"
                    );
                    None
                }
            })
            .collect())
    }

    async fn fetch_schedule(
        &self,
        origin: &Iata,
        destination: &Iata,
        month: YearMonth,
    ) -> Result<MonthSchedule, SearchError> {
        self.schedule(origin, destination, month)
            .await
            .map_err(upstream)
    }
}

fn upstream(error: ApiError) -> SearchError {
    SearchError::Upstream {
        message: error.to_string(),
    }
}
