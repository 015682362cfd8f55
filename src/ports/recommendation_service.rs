//! Recommendation Service Port - Interface to the external recommender.
//!
//! The recommendation logic lives in a separate service. This port is the
//! fixed request/response contract the client relies on:
//!
//! - `POST /recommend` with a JSON `FormData` body
//! - a JSON `RecommendationResponse` on any 2xx status
//!
//! Every failure, whatever its cause, is surfaced to the user as the same
//! message. The variants of `RecommendationError` exist for logs and tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::form::FormData;
use crate::domain::recommendation::RecommendationResponse;
use crate::domain::shell::REQUEST_FAILED_MESSAGE;

/// Port for the recommendation service.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Requests a technology stack for the described project.
    ///
    /// One best-effort attempt; implementations never retry.
    async fn recommend(&self, form: FormData) -> Result<RecommendationResponse, RecommendationError>;

    /// Checks that the service is reachable (`GET /`).
    async fn health(&self) -> Result<ServiceStatus, RecommendationError>;

    /// Describes where this service points.
    fn service_info(&self) -> ServiceInfo;
}

/// Welcome payload of the service root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Adapter name (e.g., "http", "mock").
    pub name: String,
    /// Where requests go.
    pub endpoint: String,
}

impl ServiceInfo {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Recommendation request failures.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// Could not reach the service (refused, DNS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The configured request timeout elapsed.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a valid response.
    #[error("decode error: {0}")]
    Decode(String),
}

impl RecommendationError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// The only message users ever see, regardless of cause.
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}
