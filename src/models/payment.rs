use super::status::PaymentStatus;
use super::{FromSqliteRow, decimal_column};
use chrono::NaiveDate;
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: i64,
    pub member_id: String,
    pub amount: Decimal, // ⇔ payment.amount (TEXT, canonical decimal, 2 places max)
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

impl FromSqliteRow for Payment {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let status_str: String = row.get("status")?;
        let status = PaymentStatus::from_db_str(&status_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("Invalid payment status: {}", status_str).into(),
            )
        })?;

        Ok(Self {
            id: row.get("payment_id")?,
            member_id: row.get("member_id")?,
            amount: decimal_column(row, "amount")?,
            date: row.get("payment_date")?,
            status,
        })
    }
}
