use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub rank: i32,
    pub member_id: i64,
    pub name: String,
    pub total: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub bolao_id: i64,
    pub bolao_name: String,
    pub calculated_at: Option<String>,
    pub items: Vec<StandingItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureItem {
    pub fixture_id: String,
    pub round: String,
    pub home_team: String,
    pub away_team: String,
    pub status: String,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
    pub kickoff: Option<String>,
    pub finished: bool,
    pub error: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetRequest {
    pub member_id: i64,
    pub fixture_id: String,
    pub side: String,
    pub value: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetResponse {
    pub bet_id: i64,
    pub member_id: i64,
    pub fixture_id: String,
    pub side: String,
    pub value: Option<i32>,
}
