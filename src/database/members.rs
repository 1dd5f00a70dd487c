use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Member;

pub fn insert_member(
    conn: &mut DbConn,
    bolao_id: i64,
    username: Option<&str>,
    email: &str,
) -> Result<Member> {
    let sql = "INSERT INTO members (bolao_id, username, email) VALUES (?1, ?2, ?3) RETURNING id, bolao_id, username, email, created_at";

    conn.query_row(sql, params![bolao_id, username, email], parse_member_row)
        .context("Failed to insert member")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Member>> {
    let sql = "SELECT id, bolao_id, username, email, created_at FROM members WHERE id = ?1";

    conn.query_row(sql, params![id], parse_member_row)
        .optional()
        .context("Failed to query member by id")
}

/// Members in join order; leaderboard entries keep this order.
pub fn list_by_bolao(conn: &mut DbConn, bolao_id: i64) -> Result<Vec<Member>> {
    let sql = "SELECT id, bolao_id, username, email, created_at FROM members WHERE bolao_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![bolao_id], parse_member_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_member_row(row: &rusqlite::Row) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get(0)?,
        bolao_id: row.get(1)?,
        username: row.get(2)?,
        email: row.get(3)?,
        created_at: row.get(4)?,
    })
}
