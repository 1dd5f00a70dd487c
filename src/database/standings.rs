use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::params;

use super::connection::DbConn;
use super::models::{NewStanding, StandingRow};

/// Swap one bolão's standings for a freshly computed set, atomically.
pub fn replace_for_bolao(
    conn: &mut DbConn,
    bolao_id: i64,
    rows: &[NewStanding],
    calculated_at: NaiveDateTime,
) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to open standings transaction")?;

    tx.execute("DELETE FROM standings WHERE bolao_id = ?1", params![bolao_id])
        .context("Failed to clear previous standings")?;

    for row in rows {
        tx.execute(
            "INSERT INTO standings (bolao_id, member_id, rank, name, total, calculated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![bolao_id, row.member_id, row.rank, row.name, row.total, calculated_at],
        )
        .context("Failed to insert standing")?;
    }

    tx.commit().context("Failed to commit standings update")
}

pub fn list_by_bolao(conn: &mut DbConn, bolao_id: i64) -> Result<Vec<StandingRow>> {
    let sql = "SELECT id, bolao_id, member_id, rank, name, total, calculated_at, created_at FROM standings WHERE bolao_id = ?1 ORDER BY rank";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![bolao_id], parse_standing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<StandingRow> {
    Ok(StandingRow {
        id: row.get(0)?,
        bolao_id: row.get(1)?,
        member_id: row.get(2)?,
        rank: row.get(3)?,
        name: row.get(4)?,
        total: row.get(5)?,
        calculated_at: row.get(6)?,
        created_at: row.get(7)?,
    })
}
