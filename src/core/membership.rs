use crate::core::calculator::membership::status_on;
use crate::db::pool::DbPool;
use crate::db::{log, members, payments};
use crate::errors::AppResult;
use crate::models::member::Member;
use crate::models::status::MemberStatus;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Outcome of a bulk status refresh.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub checked: usize,
    pub activated: Vec<String>,
    pub deactivated: Vec<String>,
}

impl RefreshReport {
    pub fn changed(&self) -> usize {
        self.activated.len() + self.deactivated.len()
    }
}

pub struct MembershipLogic;

impl MembershipLogic {
    /// Status the rule assigns to `member` on `today`, ignoring the stored one.
    pub fn evaluate(
        conn: &Connection,
        member: &Member,
        today: NaiveDate,
        days: i64,
    ) -> AppResult<MemberStatus> {
        let last_paid = payments::last_paid_date(conn, &member.id)?;
        Ok(status_on(today, member.join_date, last_paid, days))
    }

    /// Recompute and persist the status of one member.
    ///
    /// Meant to run inside the caller's transaction, right after the write
    /// that may have changed it.
    pub fn recompute(
        conn: &Connection,
        member_id: &str,
        today: NaiveDate,
        days: i64,
    ) -> AppResult<(MemberStatus, bool)> {
        let member = members::require_member(conn, member_id)?;
        let status = Self::evaluate(conn, &member, today, days)?;
        let changed = members::update_status(conn, member_id, status)?;
        Ok((status, changed))
    }

    /// Recompute every member's status in a single transaction.
    pub fn refresh_all(pool: &mut DbPool, today: NaiveDate, days: i64) -> AppResult<RefreshReport> {
        pool.transaction(|tx| {
            let mut report = RefreshReport::default();

            for member in members::list_members(tx)? {
                let status = Self::evaluate(tx, &member, today, days)?;
                report.checked += 1;

                if members::update_status(tx, &member.id, status)? {
                    match status {
                        MemberStatus::Active => report.activated.push(member.id.clone()),
                        MemberStatus::Inactive => report.deactivated.push(member.id.clone()),
                    }
                }
            }

            log::ttlog(
                tx,
                "status_refresh",
                &today.to_string(),
                &format!(
                    "{} members checked, {} activated, {} deactivated",
                    report.checked,
                    report.activated.len(),
                    report.deactivated.len()
                ),
            )?;

            Ok(report)
        })
    }
}
