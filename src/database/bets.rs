use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Bet;

/// Store a member's guess for one side of one fixture. A repeated
/// submission updates the existing row in place; there is never more
/// than one row per (member, fixture, side).
pub fn upsert_bet(
    conn: &mut DbConn,
    member_id: i64,
    fixture_id: &str,
    side: &str,
    value: Option<i32>,
) -> Result<Bet> {
    if let Some(existing) = find_bet(conn, member_id, fixture_id, side)? {
        let sql = "UPDATE bets SET value = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2 RETURNING id, member_id, fixture_id, side, value, created_at, updated_at";
        return conn
            .query_row(sql, params![value, existing.id], parse_bet_row)
            .context("Failed to update bet");
    }

    insert_new_bet(conn, member_id, fixture_id, side, value)
}

pub fn find_bet(
    conn: &mut DbConn,
    member_id: i64,
    fixture_id: &str,
    side: &str,
) -> Result<Option<Bet>> {
    let sql = "SELECT id, member_id, fixture_id, side, value, created_at, updated_at FROM bets WHERE member_id = ?1 AND fixture_id = ?2 AND side = ?3";

    conn.query_row(sql, params![member_id, fixture_id, side], parse_bet_row)
        .optional()
        .context("Failed to query bet")
}

pub fn list_by_member(conn: &mut DbConn, member_id: i64) -> Result<Vec<Bet>> {
    let sql = "SELECT id, member_id, fixture_id, side, value, created_at, updated_at FROM bets WHERE member_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![member_id], parse_bet_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// All bets placed inside one bolão, across its members
pub fn list_by_bolao(conn: &mut DbConn, bolao_id: i64) -> Result<Vec<Bet>> {
    let sql = "SELECT b.id, b.member_id, b.fixture_id, b.side, b.value, b.created_at, b.updated_at FROM bets b JOIN members m ON b.member_id = m.id WHERE m.bolao_id = ?1 ORDER BY b.id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![bolao_id], parse_bet_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn insert_new_bet(
    conn: &mut DbConn,
    member_id: i64,
    fixture_id: &str,
    side: &str,
    value: Option<i32>,
) -> Result<Bet> {
    let sql = "INSERT INTO bets (member_id, fixture_id, side, value) VALUES (?1, ?2, ?3, ?4) RETURNING id, member_id, fixture_id, side, value, created_at, updated_at";

    conn.query_row(sql, params![member_id, fixture_id, side, value], parse_bet_row)
        .context("Failed to insert new bet")
}

fn parse_bet_row(row: &rusqlite::Row) -> rusqlite::Result<Bet> {
    Ok(Bet {
        id: row.get(0)?,
        member_id: row.get(1)?,
        fixture_id: row.get(2)?,
        side: row.get(3)?,
        value: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{bolaos, members, setup};

    fn memory_conn() -> DbConn {
        let manager = r2d2_sqlite::SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
        let mut conn = pool.get().unwrap();
        setup::init_database(&mut conn).unwrap();
        conn
    }

    fn sample_member(conn: &mut DbConn) -> i64 {
        let bolao = bolaos::insert_bolao(conn, "Bolão da Firma", 71, 2024).unwrap();
        members::insert_member(conn, bolao.id, None, "ana@example.com")
            .unwrap()
            .id
    }

    #[test]
    fn resubmission_updates_the_same_row() {
        let mut conn = memory_conn();
        let member_id = sample_member(&mut conn);

        let first = upsert_bet(&mut conn, member_id, "1180341", "home", Some(1)).unwrap();
        let second = upsert_bet(&mut conn, member_id, "1180341", "home", Some(3)).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.value, Some(3));

        let stored = list_by_member(&mut conn, member_id).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn sides_are_independent_rows() {
        let mut conn = memory_conn();
        let member_id = sample_member(&mut conn);

        upsert_bet(&mut conn, member_id, "1180341", "home", Some(2)).unwrap();
        upsert_bet(&mut conn, member_id, "1180341", "away", Some(0)).unwrap();

        let stored = list_by_member(&mut conn, member_id).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn a_bet_may_be_stored_without_a_value() {
        let mut conn = memory_conn();
        let member_id = sample_member(&mut conn);

        let bet = upsert_bet(&mut conn, member_id, "1180341", "away", None).unwrap();

        assert_eq!(bet.value, None);
    }
}
