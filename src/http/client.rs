use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-apisports-key";

/// HTTP client with built-in rate limiting and provider API-key auth
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
    api_key: Option<String>,
}

impl RateLimitedClient {
    pub fn new(
        user_agent: &str,
        timeout_secs: u64,
        rate_limit_ms: u64,
        api_key: Option<String>,
    ) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
            api_key,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        request
            .send()
            .await
            .context("Failed to send GET request")
    }
}
