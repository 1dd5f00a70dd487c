use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{admin::admin_refresh, bets::place_bet, standings::{get_fixtures, get_standings}, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/bolao/:id/standings", get(get_standings))
        .route("/api/bolao/:id/fixtures", get(get_fixtures))
        .route("/api/bolao/:id/bets", post(place_bet))
        .route("/api/admin/refresh", post(admin_refresh))
        .with_state(state)
}
