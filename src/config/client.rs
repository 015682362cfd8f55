//! Recommendation service client configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::http::{HttpClientConfig, DEFAULT_BASE_URL};

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the recommendation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset means no timeout
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Build the HTTP adapter configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let config = HttpClientConfig::new(&self.base_url);
        match self.timeout() {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > 600 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_http_config_carries_timeout() {
        let config = ClientConfig {
            base_url: "https://stacksense.example.com/".to_string(),
            timeout_secs: Some(20),
        };
        let http = config.http_config();
        assert_eq!(http.base_url, "https://stacksense.example.com");
        assert_eq!(http.timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = ClientConfig {
            base_url: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = ClientConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let config = ClientConfig {
            timeout_secs: Some(3600),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
