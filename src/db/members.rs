use super::{query_all, query_one};
use crate::errors::{AppError, AppResult};
use crate::models::member::{Member, NewMember};
use crate::models::status::MemberStatus;
use rusqlite::{Connection, params};

const SELECT_MEMBER: &str =
    "SELECT member_id, name, phone, age, join_date, status FROM member";

pub fn insert_member(conn: &Connection, m: &NewMember, status: MemberStatus) -> AppResult<()> {
    conn.execute(
        "INSERT INTO member (member_id, name, phone, age, join_date, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![m.id, m.name, m.phone, m.age, m.join_date, status.to_db_str()],
    )
    .map_err(|e| AppError::from_write(e, &format!("member '{}'", m.id)))?;
    Ok(())
}

pub fn get_member(conn: &Connection, id: &str) -> AppResult<Option<Member>> {
    query_one(
        conn,
        &format!("{SELECT_MEMBER} WHERE member_id = ?1"),
        [id],
    )
}

/// Like [`get_member`] but absence is an error.
pub fn require_member(conn: &Connection, id: &str) -> AppResult<Member> {
    get_member(conn, id)?.ok_or_else(|| AppError::NotFound(format!("Member '{}'", id)))
}

pub fn list_members(conn: &Connection) -> AppResult<Vec<Member>> {
    query_all(conn, &format!("{SELECT_MEMBER} ORDER BY member_id ASC"), [])
}

/// Persist a recomputed status. Returns true when the stored value changed.
pub fn update_status(conn: &Connection, id: &str, status: MemberStatus) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE member SET status = ?1 WHERE member_id = ?2 AND status <> ?1",
        params![status.to_db_str(), id],
    )?;
    Ok(n > 0)
}

/// Delete the member row; dependents go with it through ON DELETE CASCADE.
pub fn delete_member(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM member WHERE member_id = ?1", [id])?)
}
