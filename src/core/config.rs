//! Client configuration read from the environment.

use std::time::Duration;

use crate::NHL_API_BASE_ENV_VAR;

/// Public NHL web API.
pub const DEFAULT_NHL_API_BASE: &str = "https://api-web.nhle.com";

/// Schedules are revalidated hourly.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

pub const DEFAULT_CACHE_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub cache_ttl: Duration,
    pub cache_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NHL_API_BASE.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `NHL_API_BASE_URL` when set.
    pub fn from_env() -> Self {
        Self::with_base_url(std::env::var(NHL_API_BASE_ENV_VAR).ok())
    }

    fn with_base_url(base_url: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
        {
            config.base_url = url;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api-web.nhle.com");
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::with_base_url(Some("http://localhost:8080/".to_string()));
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        let config = ClientConfig::with_base_url(Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_NHL_API_BASE);

        let config = ClientConfig::with_base_url(None);
        assert_eq!(config.base_url, DEFAULT_NHL_API_BASE);
    }
}
