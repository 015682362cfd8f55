//! Application handlers.
//!
//! Handlers that drive the shell from user intents and port results.

mod check_health;
mod reset_results;
mod submit_recommendation;

pub use check_health::{CheckHealthHandler, HealthCheckError, HEALTH_CHECK_TIMEOUT};
pub use reset_results::ResetResultsHandler;
pub use submit_recommendation::{FetchedRecommendation, SubmitRecommendationHandler};
