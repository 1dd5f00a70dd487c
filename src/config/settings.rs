#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://v3.football.api-sports.io",
            user_agent: "BolaoBackend/1.0",
            timeout_secs: 30,
            // Free provider tier allows 10 req/min; stay under it
            rate_limit_ms: 6500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            provider: ProviderSettings::default(),
        }
    }
}
