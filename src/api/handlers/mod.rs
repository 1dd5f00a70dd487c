use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use serde::Deserialize;

use crate::config::settings::AppConfig;

pub mod admin;
pub mod bets;
pub mod standings;

pub struct AppState {
    pub pool: Pool<SqliteConnectionManager>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct StandingsParams {
    /// Recompute from bets and results instead of reading the stored table
    pub live: Option<bool>,
}
