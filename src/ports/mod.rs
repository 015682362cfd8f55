//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecommendationService` - The external stack recommender

mod recommendation_service;

pub use recommendation_service::{
    RecommendationError, RecommendationService, ServiceInfo, ServiceStatus,
};
