use anyhow::Result;
use chrono::NaiveDateTime;
use log::{info, warn};

use crate::api::FootballApiClient;
use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::config::{get_competitions, CompetitionConfig};
use crate::database::{self, DbConn, FixtureRow};
use crate::domain::models::FixtureResponse;
use crate::domain::FetchProgress;

const CACHE_DIR: &str = "cache";
const DEFAULT_DB_PATH: &str = "bolao.db";

pub struct IngestionService {
    cache: Cache,
    api_client: FootballApiClient,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(CACHE_DIR)?,
            api_client: FootballApiClient::new(&config.provider)?,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("=== Starting Fixture Ingestion ===\n");

        let db_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let pool = database::create_pool(&db_path)?;
        let mut conn = database::get_connection(&pool)?;
        database::setup::init_database(&mut conn)?;

        for competition in get_competitions() {
            self.ingest_competition(&mut conn, &competition).await?;
        }

        info!("=== Ingestion Complete ===");
        Ok(())
    }

    async fn ingest_competition(
        &mut self,
        conn: &mut DbConn,
        competition: &CompetitionConfig,
    ) -> Result<()> {
        info!("Step 1: Discovering rounds for {}...", competition.name);
        let rounds = self
            .api_client
            .fetch_rounds(competition.league_id, competition.season)
            .await?;
        info!("  → Found {} rounds\n", rounds.len());

        info!("Step 2: Fetching fixtures...");
        let mut progress = FetchProgress::new(rounds.len());
        let mut all_fixtures = Vec::new();

        for round in &rounds {
            let was_cached = self.is_round_cached(competition, round);

            if let Some(fixtures) = self
                .api_client
                .fetch_and_cache_fixtures(competition.league_id, competition.season, round, &self.cache)
                .await?
            {
                self.store_fixtures(conn, competition, round, &fixtures)?;
                all_fixtures.extend(fixtures);
            }

            self.update_progress(&mut progress, was_cached);
        }
        info!("  → Stored {} fixtures\n", all_fixtures.len());

        info!("Step 3: Saving parsed fixture cache...");
        self.save_parsed_cache(competition, &all_fixtures)?;
        info!("  → Saved to parsed cache\n");

        Ok(())
    }

    fn is_round_cached(&self, competition: &CompetitionConfig, round: &str) -> bool {
        self.api_client
            .is_round_cached(competition.league_id, competition.season, round, &self.cache)
    }

    fn update_progress(&self, progress: &mut FetchProgress, was_cached: bool) {
        if was_cached {
            progress.increment_cached();
        } else {
            progress.increment_fetched();
        }
    }

    fn store_fixtures(
        &self,
        conn: &mut DbConn,
        competition: &CompetitionConfig,
        round: &str,
        fixtures: &[FixtureResponse],
    ) -> Result<()> {
        for fixture in fixtures {
            let row = self.build_fixture_row(competition, round, fixture);
            database::fixtures::upsert_fixture(conn, &row)?;
        }

        Ok(())
    }

    fn build_fixture_row(
        &self,
        competition: &CompetitionConfig,
        round: &str,
        fixture: &FixtureResponse,
    ) -> FixtureRow {
        FixtureRow {
            id: fixture.fixture.id.to_string(),
            league_id: competition.league_id,
            season: competition.season,
            round: round.to_string(),
            home_team: fixture.home_team_name().to_string(),
            away_team: fixture.away_team_name().to_string(),
            status: fixture.status_code().to_string(),
            fulltime_home: fixture.score.fulltime.home,
            fulltime_away: fixture.score.fulltime.away,
            halftime_home: fixture.score.halftime.home,
            halftime_away: fixture.score.halftime.away,
            kickoff: self.parse_kickoff(fixture),
            created_at: None,
        }
    }

    fn parse_kickoff(&self, fixture: &FixtureResponse) -> Option<NaiveDateTime> {
        let date_str = fixture.fixture.date.as_deref()?;

        match parse_provider_date(date_str) {
            Some(kickoff) => Some(kickoff),
            None => {
                // Kickoff is display-only, scoring never needs it
                warn!("Unparseable kickoff date for fixture {}: {}", fixture.fixture.id, date_str);
                None
            }
        }
    }

    fn save_parsed_cache(
        &self,
        competition: &CompetitionConfig,
        fixtures: &[FixtureResponse],
    ) -> Result<()> {
        self.cache.save_parsed(competition.slug, &fixtures)?;
        Ok(())
    }
}

fn parse_provider_date(date_str: &str) -> Option<NaiveDateTime> {
    use chrono::{DateTime, NaiveDateTime as ND};

    // Try RFC3339 format (with timezone)
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.naive_utc());
    }

    // Try naive datetime format (without timezone)
    if let Ok(dt) = ND::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }

    // Try with fractional seconds
    if let Ok(dt) = ND::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::parse_provider_date;

    #[test]
    fn parses_rfc3339_kickoffs() {
        let parsed = parse_provider_date("2024-05-12T19:00:00+00:00").unwrap();

        assert_eq!(parsed.to_string(), "2024-05-12 19:00:00");
    }

    #[test]
    fn parses_naive_kickoffs() {
        assert!(parse_provider_date("2024-05-12T19:00:00").is_some());
        assert!(parse_provider_date("2024-05-12T19:00:00.000").is_some());
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_provider_date("next tuesday").is_none());
    }
}
