use super::FromSqliteRow;
use chrono::NaiveDate;
use rusqlite::Row;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlan {
    pub id: i64,
    pub member_id: String,
    pub trainer_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>, // open-ended when None
}

impl FromSqliteRow for WorkoutPlan {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("plan_id")?,
            member_id: row.get("member_id")?,
            trainer_id: row.get("trainer_id")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
        })
    }
}

/// Plan joined with the member and trainer names, as listed.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOverview {
    pub id: i64,
    pub member_name: String,
    pub trainer_name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl FromSqliteRow for PlanOverview {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("plan_id")?,
            member_name: row.get("member_name")?,
            trainer_name: row.get("trainer_name")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
        })
    }
}

/// One exercise inside a plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanExercise {
    pub plan_id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub reps_sets_info: String,
}

impl FromSqliteRow for PlanExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            plan_id: row.get("plan_id")?,
            exercise_id: row.get("exercise_id")?,
            exercise_name: row.get("exercise_name")?,
            reps_sets_info: row.get("reps_sets_info")?,
        })
    }
}
