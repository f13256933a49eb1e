use crate::core::calculator::duration::workout_minutes;
use crate::core::membership::MembershipLogic;
use crate::db::pool::DbPool;
use crate::db::{attendance, members};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::PresentMember;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Result of a check-out request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOut {
    /// The open row was closed.
    Closed {
        attendance_id: i64,
        minutes: Option<i64>,
    },
    /// The member had no open row; nothing was written.
    NotCheckedIn,
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Open an attendance row for an eligible member.
    ///
    /// Eligibility is evaluated inside the same transaction as the insert.
    pub fn check_in(
        pool: &mut DbPool,
        member_id: &str,
        at: NaiveDateTime,
        membership_days: i64,
    ) -> AppResult<i64> {
        pool.transaction(|tx| {
            let member = members::require_member(tx, member_id)?;

            let status = MembershipLogic::evaluate(tx, &member, at.date(), membership_days)?;
            if !status.is_active() {
                return Err(AppError::MembershipExpired(member.id));
            }

            if attendance::open_record(tx, &member.id)?.is_some() {
                return Err(AppError::AlreadyCheckedIn(member.id));
            }

            attendance::insert_check_in(tx, &member.id, at)
        })
    }

    /// Close the member's latest open row, if there is one.
    pub fn check_out(pool: &mut DbPool, member_id: &str, at: NaiveDateTime) -> AppResult<CheckOut> {
        pool.transaction(|tx| {
            let member = members::require_member(tx, member_id)?;

            let Some(open) = attendance::open_record(tx, &member.id)? else {
                return Ok(CheckOut::NotCheckedIn);
            };

            if attendance::close_latest_open(tx, &member.id, at)? == 0 {
                return Ok(CheckOut::NotCheckedIn);
            }

            let closed = attendance::get_attendance(tx, open.id)?
                .ok_or_else(|| AppError::NotFound(format!("Attendance record {}", open.id)))?;

            Ok(CheckOut::Closed {
                attendance_id: closed.id,
                minutes: workout_minutes(&closed),
            })
        })
    }

    /// Members with an open attendance row.
    pub fn present(conn: &Connection) -> AppResult<Vec<PresentMember>> {
        attendance::present(conn)
    }

    /// Workout duration in minutes; `None` means not applicable (still open).
    pub fn duration(conn: &Connection, attendance_id: i64) -> AppResult<Option<i64>> {
        let record = attendance::get_attendance(conn, attendance_id)?
            .ok_or_else(|| AppError::NotFound(format!("Attendance record {}", attendance_id)))?;
        Ok(workout_minutes(&record))
    }
}
