use crate::core::calculator::totals::sum_amounts;
use crate::core::membership::MembershipLogic;
use crate::db::pool::DbPool;
use crate::db::{members, payments};
use crate::errors::{AppError, AppResult};
use crate::models::status::{MemberStatus, PaymentStatus};
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

/// What a recorded payment did to the member.
#[derive(Debug, Clone)]
pub struct RecordedPayment {
    pub payment_id: i64,
    pub amount: Decimal,
    pub member_status: MemberStatus,
    pub status_changed: bool,
}

pub struct PaymentLogic;

impl PaymentLogic {
    /// Parse a user-typed amount: positive, at most two decimal places.
    pub fn parse_amount(input: &str) -> AppResult<Decimal> {
        let raw = input.trim();
        let mut amount = Decimal::from_str(raw)
            .map_err(|_| AppError::InvalidAmount(format!("'{}' is not a number", raw)))?;

        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(format!(
                "'{}' must be greater than zero",
                raw
            )));
        }
        if amount.normalize().scale() > 2 {
            return Err(AppError::InvalidAmount(format!(
                "'{}' has more than two decimal places",
                raw
            )));
        }

        amount.rescale(2);
        Ok(amount)
    }

    /// Insert a payment and refresh the member's status in the same transaction.
    pub fn record(
        pool: &mut DbPool,
        member_id: &str,
        amount: Decimal,
        date: NaiveDate,
        status: PaymentStatus,
        today: NaiveDate,
        membership_days: i64,
    ) -> AppResult<RecordedPayment> {
        if amount <= Decimal::ZERO {
            return Err(AppError::InvalidAmount(amount.to_string()));
        }
        if date > today {
            return Err(AppError::Validation(format!(
                "payment date {} is in the future",
                date
            )));
        }

        pool.transaction(|tx| {
            let member = members::require_member(tx, member_id)?;
            let payment_id = payments::insert_payment(tx, &member.id, amount, date, status)?;

            let (member_status, status_changed) =
                MembershipLogic::recompute(tx, &member.id, today, membership_days)?;

            Ok(RecordedPayment {
                payment_id,
                amount,
                member_status,
                status_changed,
            })
        })
    }

    /// Sum of every payment of a member (zero when there are none).
    pub fn total(conn: &Connection, member_id: &str) -> AppResult<Decimal> {
        members::require_member(conn, member_id)?;
        let amounts = payments::amounts_for_member(conn, member_id)?;
        sum_amounts(&amounts)
    }
}
