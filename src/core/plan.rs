use crate::db::pool::DbPool;
use crate::db::{lookup, members, plans};
use crate::errors::{AppError, AppResult};
use crate::models::plan::{PlanExercise, PlanOverview, WorkoutPlan};
use chrono::NaiveDate;
use rusqlite::Connection;

/// High-level business logic for workout plans.
pub struct PlanLogic;

impl PlanLogic {
    /// Assign a trainer to a member. Overlapping plans are allowed.
    pub fn create(
        pool: &mut DbPool,
        member_id: &str,
        trainer_key: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> AppResult<i64> {
        if let Some(e) = end
            && e < start
        {
            return Err(AppError::Validation(format!(
                "end date {} is before start date {}",
                e, start
            )));
        }

        pool.transaction(|tx| {
            let member = members::require_member(tx, member_id)?;
            let trainer = lookup::resolve_trainer(tx, trainer_key)?;
            plans::insert_plan(tx, &member.id, trainer.id, start, end)
        })
    }

    /// Add an exercise to a plan; the same exercise twice is a duplicate.
    pub fn add_exercise(
        pool: &mut DbPool,
        plan_id: i64,
        exercise_key: &str,
        reps_sets_info: &str,
    ) -> AppResult<PlanExercise> {
        let info = reps_sets_info.trim();
        if info.is_empty() {
            return Err(AppError::Validation("reps/sets info must not be empty".into()));
        }

        pool.transaction(|tx| {
            let plan = plans::require_plan(tx, plan_id)?;
            let exercise = lookup::resolve_exercise(tx, exercise_key)?;

            plans::insert_plan_exercise(tx, plan.id, exercise.id, info).map_err(|e| match e {
                AppError::Duplicate(_) => AppError::Duplicate(format!(
                    "'{}' is already in plan {}",
                    exercise.name, plan.id
                )),
                other => other,
            })?;

            Ok(PlanExercise {
                plan_id: plan.id,
                exercise_id: exercise.id,
                exercise_name: exercise.name,
                reps_sets_info: info.to_string(),
            })
        })
    }

    /// Remove an exercise from a plan. Returns false when it was not there.
    pub fn remove_exercise(pool: &mut DbPool, plan_id: i64, exercise_key: &str) -> AppResult<bool> {
        pool.transaction(|tx| {
            let plan = plans::require_plan(tx, plan_id)?;
            let exercise = lookup::resolve_exercise(tx, exercise_key)?;
            Ok(plans::delete_plan_exercise(tx, plan.id, exercise.id)? > 0)
        })
    }

    /// Delete a plan and its exercises. Returns how many exercises went with it.
    pub fn delete(pool: &mut DbPool, plan_id: i64) -> AppResult<i64> {
        pool.transaction(|tx| {
            let plan = plans::require_plan(tx, plan_id)?;
            let exercises = plans::count_plan_exercises(tx, plan.id)?;
            plans::delete_plan(tx, plan.id)?;
            Ok(exercises)
        })
    }

    pub fn list(conn: &Connection) -> AppResult<Vec<PlanOverview>> {
        plans::list_overviews(conn)
    }

    /// A plan followed by its exercises (the second query depends on the first).
    pub fn show(conn: &Connection, plan_id: i64) -> AppResult<(WorkoutPlan, Vec<PlanExercise>)> {
        let plan = plans::require_plan(conn, plan_id)?;
        let exercises = plans::exercises_for_plan(conn, plan.id)?;
        Ok((plan, exercises))
    }
}
