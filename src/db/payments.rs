use super::query_all;
use crate::errors::{AppError, AppResult};
use crate::models::payment::Payment;
use crate::models::status::PaymentStatus;
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use std::str::FromStr;

const SELECT_PAYMENT: &str =
    "SELECT payment_id, member_id, amount, payment_date, status FROM payment";

pub fn insert_payment(
    conn: &Connection,
    member_id: &str,
    amount: Decimal,
    date: NaiveDate,
    status: PaymentStatus,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO payment (member_id, amount, payment_date, status)
         VALUES (?1, ?2, ?3, ?4)",
        params![member_id, amount.to_string(), date, status.to_db_str()],
    )
    .map_err(|e| AppError::from_write(e, &format!("payment for member '{}'", member_id)))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_payments(conn: &Connection, member_id: Option<&str>) -> AppResult<Vec<Payment>> {
    match member_id {
        Some(id) => query_all(
            conn,
            &format!("{SELECT_PAYMENT} WHERE member_id = ?1 ORDER BY payment_date ASC, payment_id ASC"),
            [id],
        ),
        None => query_all(
            conn,
            &format!("{SELECT_PAYMENT} ORDER BY payment_date ASC, payment_id ASC"),
            [],
        ),
    }
}

/// Raw amounts for a member. Summed in Rust: SQLite SUM() would go through f64.
pub fn amounts_for_member(conn: &Connection, member_id: &str) -> AppResult<Vec<Decimal>> {
    let mut stmt = conn.prepare_cached("SELECT amount FROM payment WHERE member_id = ?1")?;
    let rows = stmt.query_map([member_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let raw = r?;
        let amount = Decimal::from_str(&raw)
            .map_err(|_| AppError::InvalidAmount(format!("stored amount '{}'", raw)))?;
        out.push(amount);
    }
    Ok(out)
}

/// Date of the most recent settled payment, if any.
pub fn last_paid_date(conn: &Connection, member_id: &str) -> AppResult<Option<NaiveDate>> {
    let d: Option<NaiveDate> = conn.query_row(
        "SELECT MAX(payment_date) FROM payment WHERE member_id = ?1 AND status = 'Paid'",
        [member_id],
        |row| row.get(0),
    )?;
    Ok(d)
}

pub fn count_for_member(conn: &Connection, member_id: &str) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM payment WHERE member_id = ?1",
        [member_id],
        |row| row.get(0),
    )?)
}
