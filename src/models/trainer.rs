use super::{FromSqliteRow, decimal_column};
use chrono::NaiveDate;
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub salary: Decimal,
    pub date_hired: NaiveDate,
}

impl FromSqliteRow for Trainer {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("trainer_id")?,
            name: row.get("name")?,
            salary: decimal_column(row, "salary")?,
            date_hired: row.get("date_hired")?,
        })
    }
}
