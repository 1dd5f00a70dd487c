use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Bolao;

pub fn insert_bolao(conn: &mut DbConn, name: &str, league_id: i64, season: i32) -> Result<Bolao> {
    let sql = "INSERT INTO bolaos (name, league_id, season) VALUES (?1, ?2, ?3) RETURNING id, name, league_id, season, created_at";

    conn.query_row(sql, params![name, league_id, season], parse_bolao_row)
        .context("Failed to insert bolao")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Bolao>> {
    let sql = "SELECT id, name, league_id, season, created_at FROM bolaos WHERE id = ?1";

    conn.query_row(sql, params![id], parse_bolao_row)
        .optional()
        .context("Failed to query bolao by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Bolao>> {
    let sql = "SELECT id, name, league_id, season, created_at FROM bolaos ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_bolao_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Tear a pool down. Members, bets and standings cascade away with it.
pub fn delete_bolao(conn: &mut DbConn, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM bolaos WHERE id = ?1", params![id])
        .context("Failed to delete bolao")?;

    Ok(deleted > 0)
}

fn parse_bolao_row(row: &rusqlite::Row) -> rusqlite::Result<Bolao> {
    Ok(Bolao {
        id: row.get(0)?,
        name: row.get(1)?,
        league_id: row.get(2)?,
        season: row.get(3)?,
        created_at: row.get(4)?,
    })
}
