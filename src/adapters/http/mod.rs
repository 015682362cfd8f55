//! HTTP adapter for the recommendation service.

mod client;

pub use client::{HttpClientConfig, HttpRecommendationClient, DEFAULT_BASE_URL};
