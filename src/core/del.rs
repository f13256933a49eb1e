use crate::db::pool::DbPool;
use crate::db::{attendance, exercises, lookup, members, payments, plans, trainers};
use crate::errors::{AppError, AppResult};
use crate::models::exercise::Exercise;
use crate::models::member::Member;
use crate::models::trainer::Trainer;
use rusqlite::Connection;

/// Rows removed together with a member.
#[derive(Debug, Clone)]
pub struct MemberDeletion {
    pub member: Member,
    pub payments: i64,
    pub attendance: i64,
    pub plans: i64,
}

/// Rows removed together with a trainer.
#[derive(Debug, Clone)]
pub struct TrainerDeletion {
    pub trainer: Trainer,
    pub plans: i64,
}

fn exercise_usages(conn: &Connection, exercise_id: i64) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM plan_exercise WHERE exercise_id = ?1",
        [exercise_id],
        |row| row.get(0),
    )?)
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a member with payments, attendance and plans, all or nothing.
    pub fn member(pool: &mut DbPool, member_id: &str) -> AppResult<MemberDeletion> {
        pool.transaction(|tx| {
            let member = members::require_member(tx, member_id)?;

            let report = MemberDeletion {
                payments: payments::count_for_member(tx, &member.id)?,
                attendance: attendance::count_for_member(tx, &member.id)?,
                plans: plans::count_for_member(tx, &member.id)?,
                member,
            };

            if members::delete_member(tx, &report.member.id)? != 1 {
                return Err(AppError::Other(format!(
                    "member '{}' vanished during deletion",
                    report.member.id
                )));
            }

            Ok(report)
        })
    }

    /// Delete a trainer with every plan that references it.
    pub fn trainer(pool: &mut DbPool, trainer_key: &str) -> AppResult<TrainerDeletion> {
        pool.transaction(|tx| {
            let trainer = lookup::resolve_trainer(tx, trainer_key)?;
            let plans = plans::count_for_trainer(tx, trainer.id)?;

            trainers::delete_trainer(tx, trainer.id)?;

            Ok(TrainerDeletion { trainer, plans })
        })
    }

    /// Delete an exercise, dropping it from every plan. Returns the usages removed.
    pub fn exercise(pool: &mut DbPool, exercise_key: &str) -> AppResult<(Exercise, i64)> {
        pool.transaction(|tx| {
            let exercise = lookup::resolve_exercise(tx, exercise_key)?;
            let usages = exercise_usages(tx, exercise.id)?;

            exercises::delete_exercise(tx, exercise.id)?;

            Ok((exercise, usages))
        })
    }
}
