//! Adapters - Implementations of ports and front ends.
//!
//! ## Available Adapters
//!
//! - `http` - `HttpRecommendationClient`, reqwest client for the recommendation service
//! - `mock` - `MockRecommendationService`, queued outcomes for tests
//! - `terminal` - Command parser and renderer for the interactive binary

pub mod http;
pub mod mock;
pub mod terminal;
