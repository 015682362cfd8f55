//! Mock Recommendation Service for testing.
//!
//! Queued outcomes are consumed in order; call history is recorded so tests
//! can assert on the exact form that was submitted.
//!
//! # Example
//!
//! ```ignore
//! let service = MockRecommendationService::new()
//!     .with_response(response)
//!     .with_error(MockError::Status { status: 500 });
//!
//! let first = service.recommend(FormData::default()).await?;
//! assert_eq!(service.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::form::FormData;
use crate::domain::recommendation::RecommendationResponse;
use crate::ports::{RecommendationError, RecommendationService, ServiceInfo, ServiceStatus};

#[derive(Debug, Clone)]
pub enum MockOutcome {
    Success(RecommendationResponse),
    Error(MockError),
}

/// Failure modes the mock can simulate.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Connection refused or similar.
    Unreachable,
    /// Non-success HTTP status.
    Status { status: u16 },
    /// Body that does not decode.
    Malformed,
}

impl From<MockError> for RecommendationError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Unreachable => RecommendationError::network("Connection refused"),
            MockError::Status { status } => RecommendationError::status(status, "mock failure"),
            MockError::Malformed => RecommendationError::decode("missing field `results`"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockRecommendationService {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<FormData>>>,
    delay: Duration,
    healthy: bool,
}

impl MockRecommendationService {
    pub fn new() -> Self {
        Self {
            healthy: true,
            ..Self::default()
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, response: RecommendationResponse) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(response));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes `health` fail.
    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<FormData> {
        self.calls.lock().unwrap().clone()
    }

    /// Next queued outcome; an empty queue behaves like an unreachable service.
    fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockOutcome::Error(MockError::Unreachable))
    }
}

#[async_trait]
impl RecommendationService for MockRecommendationService {
    async fn recommend(&self, form: FormData) -> Result<RecommendationResponse, RecommendationError> {
        self.calls.lock().unwrap().push(form);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome() {
            MockOutcome::Success(response) => Ok(response),
            MockOutcome::Error(err) => Err(err.into()),
        }
    }

    async fn health(&self) -> Result<ServiceStatus, RecommendationError> {
        if self.healthy {
            Ok(ServiceStatus {
                message: "Welcome to StackSense API".to_string(),
            })
        } else {
            Err(MockError::Unreachable.into())
        }
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo::new("mock", "memory://recommend")
    }
}
