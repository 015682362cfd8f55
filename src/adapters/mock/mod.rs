//! In-memory adapter for tests and offline demos.

mod service;

pub use service::{MockError, MockOutcome, MockRecommendationService};
