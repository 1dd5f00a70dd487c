use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::FixtureRow;

/// Insert or refresh one fixture snapshot. Status and scores move as
/// the provider re-reports the match; identity fields stay put.
pub fn upsert_fixture(conn: &mut DbConn, fixture: &FixtureRow) -> Result<FixtureRow> {
    let sql = "INSERT INTO fixtures (id, league_id, season, round, home_team, away_team, status, fulltime_home, fulltime_away, halftime_home, halftime_away, kickoff)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        ON CONFLICT(id) DO UPDATE SET
            status = excluded.status,
            fulltime_home = excluded.fulltime_home,
            fulltime_away = excluded.fulltime_away,
            halftime_home = excluded.halftime_home,
            halftime_away = excluded.halftime_away,
            kickoff = excluded.kickoff
        RETURNING id, league_id, season, round, home_team, away_team, status, fulltime_home, fulltime_away, halftime_home, halftime_away, kickoff, created_at";

    conn.query_row(
        sql,
        params![
            fixture.id,
            fixture.league_id,
            fixture.season,
            fixture.round,
            fixture.home_team,
            fixture.away_team,
            fixture.status,
            fixture.fulltime_home,
            fixture.fulltime_away,
            fixture.halftime_home,
            fixture.halftime_away,
            fixture.kickoff,
        ],
        parse_fixture_row,
    )
    .context("Failed to upsert fixture")
}

pub fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<FixtureRow>> {
    let sql = "SELECT id, league_id, season, round, home_team, away_team, status, fulltime_home, fulltime_away, halftime_home, halftime_away, kickoff, created_at FROM fixtures WHERE id = ?1";

    conn.query_row(sql, params![id], parse_fixture_row)
        .optional()
        .context("Failed to query fixture by id")
}

pub fn list_by_competition(conn: &mut DbConn, league_id: i64, season: i32) -> Result<Vec<FixtureRow>> {
    let sql = "SELECT id, league_id, season, round, home_team, away_team, status, fulltime_home, fulltime_away, halftime_home, halftime_away, kickoff, created_at FROM fixtures WHERE league_id = ?1 AND season = ?2 ORDER BY kickoff, id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![league_id, season], parse_fixture_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_fixture_row(row: &rusqlite::Row) -> rusqlite::Result<FixtureRow> {
    Ok(FixtureRow {
        id: row.get(0)?,
        league_id: row.get(1)?,
        season: row.get(2)?,
        round: row.get(3)?,
        home_team: row.get(4)?,
        away_team: row.get(5)?,
        status: row.get(6)?,
        fulltime_home: row.get(7)?,
        fulltime_away: row.get(8)?,
        halftime_home: row.get(9)?,
        halftime_away: row.get(10)?,
        kickoff: row.get(11)?,
        created_at: row.get(12)?,
    })
}
