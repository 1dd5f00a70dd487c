use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PlaceBetRequest, PlaceBetResponse};
use crate::database;
use crate::domain::status;
use crate::scoring::BetSide;
use super::AppState;

pub async fn place_bet(
    State(state): State<Arc<AppState>>,
    Path(bolao_id): Path<i64>,
    Json(request): Json<PlaceBetRequest>,
) -> impl IntoResponse {
    let side = match BetSide::parse(&request.side.to_lowercase()) {
        Some(side) => side,
        None => return (StatusCode::BAD_REQUEST, "side must be 'home' or 'away'").into_response(),
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let member = match database::members::find_by_id(&mut conn, request.member_id) {
        Ok(Some(member)) if member.bolao_id == bolao_id => member,
        Ok(_) => return (StatusCode::NOT_FOUND, "member not found in this bolão").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    let fixture = match database::fixtures::find_by_id(&mut conn, &request.fixture_id) {
        Ok(Some(fixture)) => fixture,
        Ok(None) => return (StatusCode::NOT_FOUND, "fixture not found").into_response(),
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    // Betting closes the moment the match leaves the open-to-play class
    if !status::is_open_to_play(&fixture.status) {
        return (StatusCode::CONFLICT, "betting is closed for this fixture").into_response();
    }

    let bet = match database::bets::upsert_bet(
        &mut conn,
        member.id,
        &request.fixture_id,
        side.as_str(),
        request.value,
    ) {
        Ok(bet) => bet,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response(),
    };

    Json(PlaceBetResponse {
        bet_id: bet.id,
        member_id: bet.member_id,
        fixture_id: bet.fixture_id,
        side: bet.side,
        value: bet.value,
    })
    .into_response()
}
