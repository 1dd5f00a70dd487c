use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;

use crate::cache::Cache;
use crate::config::settings::ProviderSettings;
use crate::domain::models::{FixtureResponse, ProviderEnvelope};
use crate::http::RateLimitedClient;

const API_KEY_ENV: &str = "FOOTBALL_API_KEY";

/// Client for the upstream fixture provider API
pub struct FootballApiClient {
    client: RateLimitedClient,
    base_url: String,
}

impl FootballApiClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok();
        if api_key.is_none() {
            warn!("{} is not set; provider requests will go out unauthenticated", API_KEY_ENV);
        }

        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
            api_key,
        )?;

        Ok(Self {
            client,
            base_url: settings.base_url.to_string(),
        })
    }

    /// Fetch the round names of a league season
    pub async fn fetch_rounds(&mut self, league_id: i64, season: i32) -> Result<Vec<String>> {
        let url = self.build_rounds_url(league_id, season);
        info!("Fetching rounds for league {} season {}", league_id, season);

        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("Provider returned status: {}", response.status());
        }

        let envelope: ProviderEnvelope<String> = response
            .json()
            .await
            .context("Failed to parse round list")?;

        Ok(envelope.response)
    }

    /// Fetch one round's fixtures as raw text
    pub async fn fetch_fixtures_raw(
        &mut self,
        league_id: i64,
        season: i32,
        round: &str,
    ) -> Result<String> {
        let url = self.build_fixtures_url(league_id, season, round);
        info!("Fetching fixtures for round '{}' from {}", round, url);

        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("Provider returned status: {}", response.status());
        }

        let text = response.text().await?;
        Ok(text)
    }

    /// Fetch one round's fixtures with cache integration.
    /// Saves the FULL raw JSON to cache, then parses it.
    pub async fn fetch_and_cache_fixtures(
        &mut self,
        league_id: i64,
        season: i32,
        round: &str,
        cache: &Cache,
    ) -> Result<Option<Vec<FixtureResponse>>> {
        let key = Self::build_cache_key(league_id, season, round);

        // 1. Try load from cache
        let cached_value = cache.load_raw(&key)?;

        let json_value = if let Some(val) = cached_value {
            val
        } else {
            // 2. Fetch raw text
            let text = match self.fetch_fixtures_raw(league_id, season, round).await {
                Ok(t) => t,
                Err(e) => {
                    log::error!("Failed to fetch round '{}': {:?}", round, e);
                    return Ok(None);
                }
            };

            // 3. Parse to Value to ensure valid JSON and save the FULL structure
            let value: Value = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON for round '{}'", round))?;

            if let Err(e) = cache.save_raw(&key, &value) {
                warn!("Failed to save round '{}' to cache: {:?}", round, e);
            }

            value
        };

        // 4. Map into the typed response; the cached Value keeps all fields
        let envelope: ProviderEnvelope<FixtureResponse> = serde_json::from_value(json_value)
            .with_context(|| format!("Failed to map JSON to fixtures for round '{}'", round))?;

        Ok(Some(envelope.response))
    }

    pub fn is_round_cached(&self, league_id: i64, season: i32, round: &str, cache: &Cache) -> bool {
        cache.has_raw(&Self::build_cache_key(league_id, season, round))
    }

    // --- Helper Methods ---

    fn build_rounds_url(&self, league_id: i64, season: i32) -> String {
        format!(
            "{}/fixtures/rounds?league={}&season={}",
            self.base_url, league_id, season
        )
    }

    fn build_fixtures_url(&self, league_id: i64, season: i32, round: &str) -> String {
        format!(
            "{}/fixtures?league={}&season={}&round={}",
            self.base_url,
            league_id,
            season,
            urlencoding::encode(round)
        )
    }

    fn build_cache_key(league_id: i64, season: i32, round: &str) -> String {
        format!("{}-{}-{}", league_id, season, round)
    }
}
