//! Domain models and their mapping from SQLite rows.

pub mod attendance;
pub mod exercise;
pub mod member;
pub mod payment;
pub mod plan;
pub mod status;
pub mod trainer;

use rusqlite::Row;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Build a model from a row selected with the columns the model expects.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

/// Read a monetary TEXT column as an exact decimal.
pub(crate) fn decimal_column(row: &Row, name: &str) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(name)?;
    Decimal::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
