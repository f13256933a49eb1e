use super::{query_all, query_one};
use crate::errors::{AppError, AppResult};
use crate::models::trainer::Trainer;
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

const SELECT_TRAINER: &str = "SELECT trainer_id, name, salary, date_hired FROM trainer";

pub fn insert_trainer(
    conn: &Connection,
    name: &str,
    salary: Decimal,
    date_hired: NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trainer (name, salary, date_hired) VALUES (?1, ?2, ?3)",
        params![name, salary.to_string(), date_hired],
    )
    .map_err(|e| AppError::from_write(e, &format!("trainer '{}'", name)))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_trainer(conn: &Connection, id: i64) -> AppResult<Option<Trainer>> {
    query_one(conn, &format!("{SELECT_TRAINER} WHERE trainer_id = ?1"), [id])
}

pub fn find_by_name(conn: &Connection, name: &str) -> AppResult<Vec<Trainer>> {
    query_all(
        conn,
        &format!("{SELECT_TRAINER} WHERE name = ?1 COLLATE NOCASE ORDER BY trainer_id ASC"),
        [name],
    )
}

pub fn list_trainers(conn: &Connection) -> AppResult<Vec<Trainer>> {
    query_all(conn, &format!("{SELECT_TRAINER} ORDER BY trainer_id ASC"), [])
}

/// Delete the trainer row; its plans go with it through ON DELETE CASCADE.
pub fn delete_trainer(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM trainer WHERE trainer_id = ?1", [id])?)
}
