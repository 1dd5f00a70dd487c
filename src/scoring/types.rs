use serde::{Deserialize, Serialize};

use crate::domain::status;

pub type MemberId = i64;

/// One side of a score prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetSide {
    Home,
    Away,
}

impl BetSide {
    pub fn as_str(&self) -> &str {
        match self {
            BetSide::Home => "home",
            BetSide::Away => "away",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(BetSide::Home),
            "away" => Some(BetSide::Away),
            _ => None,
        }
    }
}

/// A member's guess for one side of one fixture.
/// `value` is None while the member has not typed a number yet.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub member_id: MemberId,
    pub fixture_id: String,
    pub side: BetSide,
    pub value: Option<i32>,
}

/// A pool membership with display identity
#[derive(Debug, Clone)]
pub struct Player {
    pub member_id: MemberId,
    pub username: Option<String>,
    pub email: String,
}

impl Player {
    /// Explicit username when present, otherwise the email local part
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(name) if !name.is_empty() => name.clone(),
            _ => local_part(&self.email).to_string(),
        }
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// A home/away goal pair where either side may still be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

impl ScorePair {
    pub fn is_absent(&self) -> bool {
        self.home.is_none() && self.away.is_none()
    }
}

/// Snapshot of one real-world match as reported by the provider
#[derive(Debug, Clone)]
pub struct FixtureResult {
    pub fixture_id: String,
    pub status: String,
    pub fulltime: ScorePair,
    pub halftime: ScorePair,
}

impl FixtureResult {
    /// Full-time score, falling back to half-time while full-time is absent
    pub fn result_pair(&self) -> ScorePair {
        if self.fulltime.is_absent() {
            self.halftime
        } else {
            self.fulltime
        }
    }

    pub fn is_decided(&self) -> bool {
        status::is_finished(&self.status)
    }
}

/// Input to the score rule evaluator. Any missing field makes the
/// prediction unscorable (worth 0).
#[derive(Debug, Clone, Copy)]
pub struct ScoreArgs {
    pub result_home: Option<i32>,
    pub result_away: Option<i32>,
    pub bet_home: Option<i32>,
    pub bet_away: Option<i32>,
}

/// One leaderboard line, in the same order as the input players
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_username() {
        let player = Player {
            member_id: 1,
            username: Some("zico".to_string()),
            email: "arthur@example.com".to_string(),
        };

        assert_eq!(player.display_name(), "zico");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let player = Player {
            member_id: 1,
            username: None,
            email: "jane.doe@example.com".to_string(),
        };

        assert_eq!(player.display_name(), "jane.doe");
    }

    #[test]
    fn display_name_treats_empty_username_as_missing() {
        let player = Player {
            member_id: 1,
            username: Some(String::new()),
            email: "jane.doe@example.com".to_string(),
        };

        assert_eq!(player.display_name(), "jane.doe");
    }

    #[test]
    fn result_pair_prefers_fulltime() {
        let fixture = FixtureResult {
            fixture_id: "10".to_string(),
            status: "FT".to_string(),
            fulltime: ScorePair {
                home: Some(2),
                away: Some(1),
            },
            halftime: ScorePair {
                home: Some(1),
                away: Some(0),
            },
        };

        assert_eq!(
            fixture.result_pair(),
            ScorePair {
                home: Some(2),
                away: Some(1)
            }
        );
    }

    #[test]
    fn result_pair_falls_back_to_halftime() {
        let fixture = FixtureResult {
            fixture_id: "10".to_string(),
            status: "HT".to_string(),
            fulltime: ScorePair::default(),
            halftime: ScorePair {
                home: Some(1),
                away: Some(0),
            },
        };

        assert_eq!(
            fixture.result_pair(),
            ScorePair {
                home: Some(1),
                away: Some(0)
            }
        );
    }

    #[test]
    fn result_pair_with_nothing_reported_stays_absent() {
        let fixture = FixtureResult {
            fixture_id: "10".to_string(),
            status: "FT".to_string(),
            fulltime: ScorePair::default(),
            halftime: ScorePair::default(),
        };

        assert!(fixture.result_pair().is_absent());
    }
}
