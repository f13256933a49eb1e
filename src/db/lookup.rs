//! Read-through resolution of user-typed references (id or name).
//!
//! Nothing is cached: every call queries the current table contents, so a
//! write is always visible to the next lookup.

use crate::db::{exercises, trainers};
use crate::errors::{AppError, AppResult};
use crate::models::exercise::Exercise;
use crate::models::trainer::Trainer;
use rusqlite::Connection;

/// Resolve a trainer by numeric id, falling back to an exact name match.
pub fn resolve_trainer(conn: &Connection, key: &str) -> AppResult<Trainer> {
    let key = key.trim();

    if let Ok(id) = key.parse::<i64>()
        && let Some(t) = trainers::get_trainer(conn, id)?
    {
        return Ok(t);
    }

    let mut found = trainers::find_by_name(conn, key)?;
    match found.len() {
        0 => Err(AppError::NotFound(format!("Trainer '{}'", key))),
        1 => Ok(found.remove(0)),
        _ => {
            let ids: Vec<String> = found.iter().map(|t| t.id.to_string()).collect();
            Err(AppError::Validation(format!(
                "trainer name '{}' is ambiguous, use one of the ids: {}",
                key,
                ids.join(", ")
            )))
        }
    }
}

/// Resolve an exercise by numeric id, falling back to its (unique) name.
pub fn resolve_exercise(conn: &Connection, key: &str) -> AppResult<Exercise> {
    let key = key.trim();

    if let Ok(id) = key.parse::<i64>()
        && let Some(e) = exercises::get_exercise(conn, id)?
    {
        return Ok(e);
    }

    exercises::find_by_name(conn, key)?
        .ok_or_else(|| AppError::NotFound(format!("Exercise '{}'", key)))
}
