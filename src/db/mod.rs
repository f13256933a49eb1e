pub mod attendance;
pub mod exercises;
pub mod initialize;
pub mod log;
pub mod lookup;
pub mod members;
pub mod migrate;
pub mod payments;
pub mod plans;
pub mod pool;
pub mod stats;
pub mod trainers;

use crate::errors::AppResult;
use crate::models::FromSqliteRow;
use rusqlite::{Connection, Params};

/// Run a SELECT and map every row into `T`.
pub(crate) fn query_all<T: FromSqliteRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> AppResult<Vec<T>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, T::from_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Run a SELECT expected to return at most one row.
pub(crate) fn query_one<T: FromSqliteRow, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> AppResult<Option<T>> {
    use rusqlite::OptionalExtension;

    let mut stmt = conn.prepare_cached(sql)?;
    Ok(stmt.query_row(params, T::from_row).optional()?)
}
