use super::{query_all, query_one};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{Attendance, PresentMember};
use chrono::NaiveDateTime;
use rusqlite::{Connection, params};

const SELECT_ATTENDANCE: &str =
    "SELECT attendance_id, member_id, check_in, check_out FROM attendance";

pub fn insert_check_in(conn: &Connection, member_id: &str, at: NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (member_id, check_in) VALUES (?1, ?2)",
        params![member_id, at],
    )
    .map_err(|e| AppError::from_write(e, &format!("open attendance for member '{}'", member_id)))?;
    Ok(conn.last_insert_rowid())
}

/// The latest attendance row without a check-out, if any.
pub fn open_record(conn: &Connection, member_id: &str) -> AppResult<Option<Attendance>> {
    query_one(
        conn,
        &format!(
            "{SELECT_ATTENDANCE}
             WHERE member_id = ?1 AND check_out IS NULL
             ORDER BY check_in DESC, attendance_id DESC
             LIMIT 1"
        ),
        [member_id],
    )
}

/// Close the most recent open row of a member. Updates at most one row.
///
/// The check-out never precedes the check-in, even if the clock moved back.
pub fn close_latest_open(conn: &Connection, member_id: &str, at: NaiveDateTime) -> AppResult<usize> {
    let n = conn.execute(
        r#"
        UPDATE attendance
        SET check_out = MAX(?1, check_in)
        WHERE attendance_id = (
            SELECT attendance_id FROM attendance
            WHERE member_id = ?2 AND check_out IS NULL
            ORDER BY check_in DESC, attendance_id DESC
            LIMIT 1
        )
        "#,
        params![at, member_id],
    )?;
    Ok(n)
}

pub fn get_attendance(conn: &Connection, id: i64) -> AppResult<Option<Attendance>> {
    query_one(
        conn,
        &format!("{SELECT_ATTENDANCE} WHERE attendance_id = ?1"),
        [id],
    )
}

pub fn for_member(conn: &Connection, member_id: &str) -> AppResult<Vec<Attendance>> {
    query_all(
        conn,
        &format!("{SELECT_ATTENDANCE} WHERE member_id = ?1 ORDER BY check_in ASC, attendance_id ASC"),
        [member_id],
    )
}

/// Members currently inside the gym.
pub fn present(conn: &Connection) -> AppResult<Vec<PresentMember>> {
    query_all(
        conn,
        r#"
        SELECT a.member_id AS member_id, m.name AS name, a.check_in AS check_in
        FROM attendance a
        JOIN member m ON a.member_id = m.member_id
        WHERE a.check_out IS NULL
        ORDER BY a.check_in ASC
        "#,
        [],
    )
}

pub fn count_for_member(conn: &Connection, member_id: &str) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM attendance WHERE member_id = ?1",
        [member_id],
        |row| row.get(0),
    )?)
}
