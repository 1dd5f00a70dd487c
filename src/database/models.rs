use chrono::NaiveDateTime;

use crate::scoring::{BetSide, FixtureResult, Player, Prediction, ScorePair};

#[derive(Debug, Clone)]
pub struct Bolao {
    pub id: i64,
    pub name: String,
    pub league_id: i64,
    pub season: i32,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Member {
    pub id: i64,
    pub bolao_id: i64,
    pub username: Option<String>,
    pub email: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Member {
    pub fn to_player(&self) -> Player {
        Player {
            member_id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bet {
    pub id: i64,
    pub member_id: i64,
    pub fixture_id: String,
    pub side: String,
    pub value: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Bet {
    /// None when the stored side tag is not a known side
    pub fn to_prediction(&self) -> Option<Prediction> {
        let side = BetSide::parse(&self.side)?;
        Some(Prediction {
            member_id: self.member_id,
            fixture_id: self.fixture_id.clone(),
            side,
            value: self.value,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FixtureRow {
    pub id: String,
    pub league_id: i64,
    pub season: i32,
    pub round: String,
    pub home_team: String,
    pub away_team: String,
    pub status: String,
    pub fulltime_home: Option<i32>,
    pub fulltime_away: Option<i32>,
    pub halftime_home: Option<i32>,
    pub halftime_away: Option<i32>,
    pub kickoff: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}

impl FixtureRow {
    pub fn to_result(&self) -> FixtureResult {
        FixtureResult {
            fixture_id: self.id.clone(),
            status: self.status.clone(),
            fulltime: ScorePair {
                home: self.fulltime_home,
                away: self.fulltime_away,
            },
            halftime: ScorePair {
                home: self.halftime_home,
                away: self.halftime_away,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct StandingRow {
    pub id: i64,
    pub bolao_id: i64,
    pub member_id: i64,
    pub rank: i32,
    pub name: String,
    pub total: i64,
    pub calculated_at: NaiveDateTime,
    pub created_at: Option<NaiveDateTime>,
}

/// A standings line ready to be persisted for one bolão
#[derive(Debug, Clone)]
pub struct NewStanding {
    pub member_id: i64,
    pub rank: i32,
    pub name: String,
    pub total: i64,
}
