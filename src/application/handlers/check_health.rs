//! CheckHealthHandler - Bounded reachability check of the recommendation service.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;
use tracing::debug;

use crate::ports::{RecommendationError, RecommendationService, ServiceStatus};

/// Upper bound on the startup check, independent of the request timeout.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum HealthCheckError {
    #[error("no answer within {}ms", .0.as_millis())]
    TimedOut(Duration),

    #[error(transparent)]
    Service(#[from] RecommendationError),
}

pub struct CheckHealthHandler {
    service: Arc<dyn RecommendationService>,
    limit: Duration,
}

impl CheckHealthHandler {
    pub fn new(service: Arc<dyn RecommendationService>) -> Self {
        Self {
            service,
            limit: HEALTH_CHECK_TIMEOUT,
        }
    }

    pub fn with_limit(mut self, limit: Duration) -> Self {
        self.limit = limit;
        self
    }

    /// Asks the service root for its welcome message, giving up after the limit.
    pub async fn handle(&self) -> Result<ServiceStatus, HealthCheckError> {
        debug!(limit_ms = self.limit.as_millis() as u64, "Checking recommendation service");
        match timeout(self.limit, self.service.health()).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(HealthCheckError::TimedOut(self.limit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockRecommendationService;

    #[tokio::test]
    async fn healthy_service_returns_welcome() {
        let handler = CheckHealthHandler::new(Arc::new(MockRecommendationService::new()));

        let status = handler.handle().await.unwrap();

        assert_eq!(status.message, "Welcome to StackSense API");
    }

    #[tokio::test]
    async fn unhealthy_service_reports_cause() {
        let service = MockRecommendationService::new().unhealthy();
        let handler = CheckHealthHandler::new(Arc::new(service));

        let err = handler.handle().await.unwrap_err();

        assert!(matches!(
            err,
            HealthCheckError::Service(RecommendationError::Network(_))
        ));
    }
}
