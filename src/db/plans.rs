use super::{query_all, query_one};
use crate::errors::{AppError, AppResult};
use crate::models::plan::{PlanExercise, PlanOverview, WorkoutPlan};
use chrono::NaiveDate;
use rusqlite::{Connection, params};

const SELECT_PLAN: &str =
    "SELECT plan_id, member_id, trainer_id, start_date, end_date FROM workout_plan";

const SELECT_OVERVIEW: &str = r#"
    SELECT w.plan_id AS plan_id, m.name AS member_name, t.name AS trainer_name,
           w.start_date AS start_date, w.end_date AS end_date
    FROM workout_plan w
    JOIN member m ON w.member_id = m.member_id
    JOIN trainer t ON w.trainer_id = t.trainer_id
"#;

const SELECT_PLAN_EXERCISE: &str = r#"
    SELECT pe.plan_id AS plan_id, pe.exercise_id AS exercise_id,
           e.name AS exercise_name, pe.reps_sets_info AS reps_sets_info
    FROM plan_exercise pe
    JOIN exercise e ON pe.exercise_id = e.exercise_id
"#;

pub fn insert_plan(
    conn: &Connection,
    member_id: &str,
    trainer_id: i64,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO workout_plan (member_id, trainer_id, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![member_id, trainer_id, start, end],
    )
    .map_err(|e| AppError::from_write(e, &format!("workout plan for member '{}'", member_id)))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_plan(conn: &Connection, id: i64) -> AppResult<Option<WorkoutPlan>> {
    query_one(conn, &format!("{SELECT_PLAN} WHERE plan_id = ?1"), [id])
}

pub fn require_plan(conn: &Connection, id: i64) -> AppResult<WorkoutPlan> {
    get_plan(conn, id)?.ok_or_else(|| AppError::NotFound(format!("Workout plan {}", id)))
}

pub fn list_overviews(conn: &Connection) -> AppResult<Vec<PlanOverview>> {
    query_all(conn, &format!("{SELECT_OVERVIEW} ORDER BY w.plan_id ASC"), [])
}

pub fn plans_for_member(conn: &Connection, member_id: &str) -> AppResult<Vec<WorkoutPlan>> {
    query_all(
        conn,
        &format!("{SELECT_PLAN} WHERE member_id = ?1 ORDER BY start_date ASC, plan_id ASC"),
        [member_id],
    )
}

pub fn count_for_member(conn: &Connection, member_id: &str) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM workout_plan WHERE member_id = ?1",
        [member_id],
        |row| row.get(0),
    )?)
}

pub fn count_for_trainer(conn: &Connection, trainer_id: i64) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM workout_plan WHERE trainer_id = ?1",
        [trainer_id],
        |row| row.get(0),
    )?)
}

pub fn delete_plan(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM workout_plan WHERE plan_id = ?1", [id])?)
}

pub fn exercises_for_plan(conn: &Connection, plan_id: i64) -> AppResult<Vec<PlanExercise>> {
    query_all(
        conn,
        &format!("{SELECT_PLAN_EXERCISE} WHERE pe.plan_id = ?1 ORDER BY e.name ASC"),
        [plan_id],
    )
}

pub fn insert_plan_exercise(
    conn: &Connection,
    plan_id: i64,
    exercise_id: i64,
    reps_sets_info: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO plan_exercise (plan_id, exercise_id, reps_sets_info) VALUES (?1, ?2, ?3)",
        params![plan_id, exercise_id, reps_sets_info],
    )
    .map_err(|e| {
        AppError::from_write(e, &format!("exercise {} in plan {}", exercise_id, plan_id))
    })?;
    Ok(())
}

pub fn delete_plan_exercise(conn: &Connection, plan_id: i64, exercise_id: i64) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM plan_exercise WHERE plan_id = ?1 AND exercise_id = ?2",
        params![plan_id, exercise_id],
    )?)
}

pub fn count_plan_exercises(conn: &Connection, plan_id: i64) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM plan_exercise WHERE plan_id = ?1",
        [plan_id],
        |row| row.get(0),
    )?)
}
