use serde::{Deserialize, Serialize};

use crate::scoring::{FixtureResult, ScorePair};

/// Envelope every provider endpoint wraps its payload in
#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderEnvelope<T> {
    #[serde(default)]
    pub errors: serde_json::Value,
    pub response: Vec<T>,
}

/// Raw fixture entry from the provider API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureResponse {
    pub fixture: FixtureInfo,
    pub teams: TeamsInfo,
    #[serde(default)]
    pub goals: GoalsPair,
    pub score: ScoreBreakdown,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureInfo {
    pub id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureStatus {
    #[serde(rename = "long", default)]
    pub long_name: Option<String>,
    #[serde(rename = "short", default)]
    pub short: String,
    #[serde(default)]
    pub elapsed: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamsInfo {
    pub home: TeamInfo,
    pub away: TeamInfo,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct GoalsPair {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub halftime: GoalsPair,
    #[serde(default)]
    pub fulltime: GoalsPair,
    #[serde(default)]
    pub extratime: GoalsPair,
    #[serde(default)]
    pub penalty: GoalsPair,
}

impl FixtureResponse {
    pub fn status_code(&self) -> &str {
        &self.fixture.status.short
    }

    pub fn home_team_name(&self) -> &str {
        &self.teams.home.name
    }

    pub fn away_team_name(&self) -> &str {
        &self.teams.away.name
    }

    /// Convert into the snapshot the scoring engine consumes
    pub fn to_result(&self) -> FixtureResult {
        FixtureResult {
            fixture_id: self.fixture.id.to_string(),
            status: self.fixture.status.short.clone(),
            fulltime: ScorePair {
                home: self.score.fulltime.home,
                away: self.score.fulltime.away,
            },
            halftime: ScorePair {
                home: self.score.halftime.home,
                away: self.score.halftime.away,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "fixture": {
            "id": 1180341,
            "date": "2024-05-12T19:00:00+00:00",
            "timezone": "UTC",
            "status": { "long": "Match Finished", "short": "FT", "elapsed": 90 }
        },
        "teams": {
            "home": { "id": 127, "name": "Flamengo" },
            "away": { "id": 126, "name": "São Paulo" }
        },
        "goals": { "home": 2, "away": 1 },
        "score": {
            "halftime": { "home": 1, "away": 0 },
            "fulltime": { "home": 2, "away": 1 },
            "extratime": { "home": null, "away": null },
            "penalty": { "home": null, "away": null }
        }
    }"#;

    #[test]
    fn parses_a_provider_fixture() {
        let fixture: FixtureResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(fixture.fixture.id, 1180341);
        assert_eq!(fixture.status_code(), "FT");
        assert_eq!(fixture.home_team_name(), "Flamengo");
        assert_eq!(fixture.score.fulltime.home, Some(2));
    }

    #[test]
    fn converts_to_an_engine_result() {
        let fixture: FixtureResponse = serde_json::from_str(SAMPLE).unwrap();

        let result = fixture.to_result();

        assert_eq!(result.fixture_id, "1180341");
        assert!(result.is_decided());
        assert_eq!(result.result_pair().home, Some(2));
        assert_eq!(result.result_pair().away, Some(1));
    }

    #[test]
    fn missing_score_sections_default_to_absent() {
        let minimal = r#"{
            "fixture": { "id": 7, "status": { "short": "NS" } },
            "teams": {
                "home": { "id": 1, "name": "A" },
                "away": { "id": 2, "name": "B" }
            },
            "score": {}
        }"#;

        let fixture: FixtureResponse = serde_json::from_str(minimal).unwrap();

        assert!(fixture.to_result().result_pair().is_absent());
    }
}
