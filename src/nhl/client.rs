//! Async client for the NHL score endpoint.

use chrono::NaiveDate;
use reqwest::Client;

use crate::core::{default_header_map, score_url, CacheStatus, ClientConfig, TtlCache};
use crate::error::{FpointsError, Result};
use crate::nhl::types::ScoreResponse;

/// Fetches schedules and keeps each date's response for the configured TTL.
pub struct NhlClient {
    http: Client,
    base_url: String,
    cache: TtlCache<NaiveDate, ScoreResponse>,
}

impl NhlClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .default_headers(default_header_map()?)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            cache: TtlCache::new(config.cache_capacity, config.cache_ttl),
        })
    }

    /// Client configured from `NHL_API_BASE_URL` and defaults.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Games for `date`, from cache unless it is stale or `refresh` is set.
    pub async fn fetch_schedule(
        &self,
        date: NaiveDate,
        refresh: bool,
    ) -> Result<(ScoreResponse, CacheStatus)> {
        if !refresh {
            if let Some(cached) = self.cache.get(&date) {
                tracing::debug!(%date, "schedule cache hit");
                return Ok((cached, CacheStatus::Hit));
            }
        }

        let response = self.get_score(date).await?;
        self.cache.put(date, response.clone());
        let (entries, capacity) = self.cache.stats();
        tracing::debug!(
            %date,
            entries,
            capacity,
            ttl_secs = self.cache.ttl().as_secs(),
            "schedule cached"
        );

        let status = if refresh {
            CacheStatus::Refreshed
        } else {
            CacheStatus::Miss
        };
        Ok((response, status))
    }

    /// Store a response for `date` as if it had just been fetched.
    pub fn prime_cache(&self, date: NaiveDate, response: ScoreResponse) {
        self.cache.put(date, response);
    }

    async fn get_score(&self, date: NaiveDate) -> Result<ScoreResponse> {
        let url = score_url(&self.base_url, &date.format("%Y-%m-%d").to_string());
        tracing::debug!(%url, "fetching schedule");

        let res = self.http.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "NHL API request failed");
            return Err(FpointsError::ApiStatus {
                status: status.as_u16(),
            });
        }

        let body = res.json::<ScoreResponse>().await?;
        tracing::info!(%date, games = body.games.len(), "schedule fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_CACHE_CAPACITY;

    fn offline_config() -> ClientConfig {
        // Nothing listens on port 1, so any real request fails fast
        ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let client = NhlClient::new(offline_config()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
    }

    #[tokio::test]
    async fn test_cached_schedule_is_a_hit() {
        let client = NhlClient::new(offline_config()).unwrap();
        let sample: ScoreResponse =
            serde_json::from_str(include_str!("../../tests/fixtures/score_2025-01-06.json"))
                .unwrap();
        client.prime_cache(date(), sample.clone());
        assert_eq!(client.cache.stats(), (1, DEFAULT_CACHE_CAPACITY));

        let (response, status) = client.fetch_schedule(date(), false).await.unwrap();
        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(response, sample);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let client = NhlClient::new(offline_config()).unwrap();
        client.prime_cache(date(), ScoreResponse::default());

        // The cached entry is ignored, so the unreachable server is contacted
        let result = client.fetch_schedule(date(), true).await;
        assert!(matches!(result, Err(FpointsError::Http(_))));
    }

    #[tokio::test]
    async fn test_cache_miss_fetches() {
        let client = NhlClient::new(offline_config()).unwrap();
        let result = client.fetch_schedule(date(), false).await;
        assert!(matches!(result, Err(FpointsError::Http(_))));
    }
}
