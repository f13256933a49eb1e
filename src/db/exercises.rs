use super::{query_all, query_one};
use crate::errors::{AppError, AppResult};
use crate::models::exercise::Exercise;
use rusqlite::Connection;

const SELECT_EXERCISE: &str = "SELECT exercise_id, name FROM exercise";

pub fn insert_exercise(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO exercise (name) VALUES (?1)", [name])
        .map_err(|e| AppError::from_write(e, &format!("exercise '{}'", name)))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_exercise(conn: &Connection, id: i64) -> AppResult<Option<Exercise>> {
    query_one(conn, &format!("{SELECT_EXERCISE} WHERE exercise_id = ?1"), [id])
}

/// Names are unique (case-insensitive), so this returns at most one row.
pub fn find_by_name(conn: &Connection, name: &str) -> AppResult<Option<Exercise>> {
    query_one(conn, &format!("{SELECT_EXERCISE} WHERE name = ?1 COLLATE NOCASE"), [name])
}

pub fn list_exercises(conn: &Connection) -> AppResult<Vec<Exercise>> {
    query_all(conn, &format!("{SELECT_EXERCISE} ORDER BY name ASC"), [])
}

pub fn delete_exercise(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM exercise WHERE exercise_id = ?1", [id])?)
}
