/// Competitions the pools bet on
///
/// To find league IDs on the provider:
/// 1. Query /leagues?search={name}
/// 2. Take the `league.id` field from the response
/// 3. The season is the starting year of the edition
#[derive(Debug, Clone)]
pub struct CompetitionConfig {
    pub league_id: i64,
    pub slug: &'static str,
    pub name: &'static str,
    pub season: i32,
}

impl CompetitionConfig {
    pub fn new(league_id: i64, slug: &'static str, name: &'static str, season: i32) -> Self {
        Self {
            league_id,
            slug,
            name,
            season,
        }
    }
}

/// Get the list of competitions to ingest fixtures for
pub fn get_competitions() -> Vec<CompetitionConfig> {
    vec![
        CompetitionConfig::new(71, "brasileirao-serie-a", "Brasileirão Série A", 2024),
        CompetitionConfig::new(73, "copa-do-brasil", "Copa do Brasil", 2024),
        CompetitionConfig::new(13, "libertadores", "CONMEBOL Libertadores", 2024),
    ]
}
