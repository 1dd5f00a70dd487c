use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::database::{self, DbConn, models::{Bolao, NewStanding}};
use crate::scoring::{self, FixtureResult, LeaderboardEntry, Player, Prediction};

const DEFAULT_DB_PATH: &str = "bolao.db";

pub struct ProcessingService {
    db_path: String,
}

impl ProcessingService {
    pub fn new() -> Result<Self> {
        let db_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

        Ok(Self { db_path })
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Starting Standings Processing ===\n");

        let pool = database::create_pool(&self.db_path)?;
        let mut conn = database::get_connection(&pool)?;
        database::setup::init_database(&mut conn)?;

        let bolaos = database::bolaos::list_all(&mut conn)?;
        info!("  → Processing {} bolãos\n", bolaos.len());

        for bolao in &bolaos {
            self.process_bolao(&mut conn, bolao)?;
        }

        info!("=== Processing Complete ===");
        Ok(())
    }

    fn process_bolao(&self, conn: &mut DbConn, bolao: &Bolao) -> Result<()> {
        let ranked = compute_ranked_standings(conn, bolao)?;
        let calculated_at = Utc::now().naive_utc();

        database::standings::replace_for_bolao(conn, bolao.id, &ranked, calculated_at)?;
        info!("  → {}: standings saved for {} members", bolao.name, ranked.len());

        Ok(())
    }
}

/// Load one bolão's members, fixtures and bets, run the leaderboard
/// engine and rank the outcome. Ranking happens here, at the
/// persistence/display boundary; the engine keeps member order.
pub fn compute_ranked_standings(conn: &mut DbConn, bolao: &Bolao) -> Result<Vec<NewStanding>> {
    let (member_ids, entries) = compute_member_totals(conn, bolao)?;
    Ok(rank_entries(member_ids, entries))
}

fn compute_member_totals(
    conn: &mut DbConn,
    bolao: &Bolao,
) -> Result<(Vec<i64>, Vec<LeaderboardEntry>)> {
    let members = database::members::list_by_bolao(conn, bolao.id)?;
    let fixtures = database::fixtures::list_by_competition(conn, bolao.league_id, bolao.season)?;
    let bets = database::bets::list_by_bolao(conn, bolao.id)?;

    let players: Vec<Player> = members.iter().map(|member| member.to_player()).collect();
    let results: Vec<FixtureResult> = fixtures.iter().map(|fixture| fixture.to_result()).collect();
    let predictions: Vec<Prediction> = bets.iter().filter_map(|bet| bet.to_prediction()).collect();

    let entries = scoring::compute_leaderboard(&players, &results, &predictions);
    let member_ids = members.iter().map(|member| member.id).collect();

    Ok((member_ids, entries))
}

fn rank_entries(member_ids: Vec<i64>, entries: Vec<LeaderboardEntry>) -> Vec<NewStanding> {
    let mut lines: Vec<(i64, LeaderboardEntry)> =
        member_ids.into_iter().zip(entries).collect();

    // Stable sort keeps join order among equal totals
    lines.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    lines
        .into_iter()
        .enumerate()
        .map(|(idx, (member_id, entry))| NewStanding {
            member_id,
            rank: (idx + 1) as i32,
            name: entry.name,
            total: entry.total as i64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            total,
        }
    }

    #[test]
    fn ranks_by_total_descending() {
        let ranked = rank_entries(
            vec![1, 2, 3],
            vec![entry("ana", 80), entry("bruno", 350), entry("carla", 200)],
        );

        assert_eq!(ranked[0].name, "bruno");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].name, "carla");
        assert_eq!(ranked[2].name, "ana");
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn ties_keep_join_order() {
        let ranked = rank_entries(
            vec![1, 2],
            vec![entry("ana", 100), entry("bruno", 100)],
        );

        assert_eq!(ranked[0].member_id, 1);
        assert_eq!(ranked[1].member_id, 2);
    }
}
