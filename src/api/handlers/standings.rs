use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{FixtureItem, StandingItem, StandingsResponse};
use crate::database::{self, models::Bolao};
use crate::domain::status;
use crate::services::processing;
use super::{AppState, StandingsParams};

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(bolao_id): Path<i64>,
    Query(params): Query<StandingsParams>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let bolao = match database::bolaos::find_by_id(&mut conn, bolao_id) {
        Ok(Some(bolao)) => bolao,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    if params.live.unwrap_or(false) {
        return live_standings(&mut conn, &bolao).into_response();
    }

    stored_standings(&mut conn, &bolao).into_response()
}

fn stored_standings(conn: &mut database::DbConn, bolao: &Bolao) -> axum::response::Response {
    let rows = match database::standings::list_by_bolao(conn, bolao.id) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let calculated_at = rows.first().map(|row| row.calculated_at.to_string());
    let items = rows
        .into_iter()
        .map(|row| StandingItem {
            rank: row.rank,
            member_id: row.member_id,
            name: row.name,
            total: row.total,
        })
        .collect();

    Json(StandingsResponse {
        bolao_id: bolao.id,
        bolao_name: bolao.name.clone(),
        calculated_at,
        items,
    })
    .into_response()
}

fn live_standings(conn: &mut database::DbConn, bolao: &Bolao) -> axum::response::Response {
    let ranked = match processing::compute_ranked_standings(conn, bolao) {
        Ok(ranked) => ranked,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Compute Error: {}", e)).into_response(),
    };

    let items = ranked
        .into_iter()
        .map(|row| StandingItem {
            rank: row.rank,
            member_id: row.member_id,
            name: row.name,
            total: row.total,
        })
        .collect();

    Json(StandingsResponse {
        bolao_id: bolao.id,
        bolao_name: bolao.name.clone(),
        calculated_at: None,
        items,
    })
    .into_response()
}

pub async fn get_fixtures(
    State(state): State<Arc<AppState>>,
    Path(bolao_id): Path<i64>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let bolao = match database::bolaos::find_by_id(&mut conn, bolao_id) {
        Ok(Some(bolao)) => bolao,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let rows = match database::fixtures::list_by_competition(&mut conn, bolao.league_id, bolao.season) {
        Ok(rows) => rows,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let items: Vec<FixtureItem> = rows
        .into_iter()
        .map(|row| {
            let result = row.to_result().result_pair();
            FixtureItem {
                finished: status::is_finished(&row.status),
                error: status::is_error(&row.status),
                fixture_id: row.id,
                round: row.round,
                home_team: row.home_team,
                away_team: row.away_team,
                status: row.status,
                home_goals: result.home,
                away_goals: result.away,
                kickoff: row.kickoff.map(|k| k.to_string()),
            }
        })
        .collect();

    Json(items).into_response()
}
