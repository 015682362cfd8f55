//! HTTP Recommendation Client - reqwest implementation of RecommendationService.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpClientConfig::new("http://localhost:8000")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let client = HttpRecommendationClient::new(config)?;
//! ```
//!
//! Without `with_timeout` requests wait as long as the transport allows.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

use crate::domain::form::FormData;
use crate::domain::recommendation::RecommendationResponse;
use crate::ports::{RecommendationError, RecommendationService, ServiceInfo, ServiceStatus};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Service root, without the `/recommend` path.
    pub base_url: String,
    /// Optional whole-request timeout.
    pub timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

pub struct HttpRecommendationClient {
    config: HttpClientConfig,
    client: Client,
}

impl HttpRecommendationClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, RecommendationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RecommendationError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn recommend_url(&self) -> String {
        format!("{}/recommend", self.config.base_url)
    }

    fn root_url(&self) -> String {
        format!("{}/", self.config.base_url)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> RecommendationError {
        if e.is_timeout() {
            RecommendationError::Timeout {
                timeout_secs: self.config.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }
        } else if e.is_connect() {
            RecommendationError::network(format!("Connection failed: {}", e))
        } else {
            RecommendationError::network(e.to_string())
        }
    }

    /// Passes 2xx responses through; anything else becomes a status error.
    async fn ensure_success(response: Response) -> Result<Response, RecommendationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RecommendationError::status(status.as_u16(), body))
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationClient {
    async fn recommend(&self, form: FormData) -> Result<RecommendationResponse, RecommendationError> {
        debug!(url = %self.recommend_url(), project_type = %form.project_type, "Requesting recommendation");

        let response = self
            .client
            .post(self.recommend_url())
            .header("Content-Type", "application/json")
            .json(&form)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = Self::ensure_success(response).await?;

        response
            .json::<RecommendationResponse>()
            .await
            .map_err(|e| RecommendationError::decode(format!("Failed to parse response: {}", e)))
    }

    async fn health(&self) -> Result<ServiceStatus, RecommendationError> {
        let response = self
            .client
            .get(self.root_url())
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        Self::ensure_success(response)
            .await?
            .json::<ServiceStatus>()
            .await
            .map_err(|e| RecommendationError::decode(e.to_string()))
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo::new("http", self.recommend_url())
    }
}
