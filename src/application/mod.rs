//! Application layer - Handlers.
//!
//! This layer coordinates the shell and the recommendation service port.

pub mod handlers;

pub use handlers::{
    CheckHealthHandler, FetchedRecommendation, HealthCheckError, ResetResultsHandler,
    SubmitRecommendationHandler, HEALTH_CHECK_TIMEOUT,
};
