use crate::core::calculator::duration::workout_minutes;
use crate::core::payment::PaymentLogic;
use crate::db::{attendance, members, plans, trainers};
use crate::errors::AppResult;
use crate::models::attendance::Attendance;
use crate::models::member::Member;
use crate::models::plan::{PlanExercise, WorkoutPlan};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceLine {
    pub record: Attendance,
    pub minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanDetail {
    pub plan: WorkoutPlan,
    pub trainer_name: Option<String>,
    pub exercises: Vec<PlanExercise>,
}

/// Everything shown on a member's detail page.
#[derive(Debug, Clone, Serialize)]
pub struct MemberDetails {
    pub member: Member,
    pub total_paid: Decimal,
    pub attendance: Vec<AttendanceLine>,
    pub plans: Vec<PlanDetail>,
}

impl MemberDetails {
    pub fn load(conn: &Connection, member_id: &str) -> AppResult<Self> {
        let member = members::require_member(conn, member_id)?;
        let total_paid = PaymentLogic::total(conn, &member.id)?;

        let attendance = attendance::for_member(conn, &member.id)?
            .into_iter()
            .map(|record| AttendanceLine {
                minutes: workout_minutes(&record),
                record,
            })
            .collect();

        let mut plan_details = Vec::new();
        for plan in plans::plans_for_member(conn, &member.id)? {
            let trainer_name = trainers::get_trainer(conn, plan.trainer_id)?.map(|t| t.name);
            let exercises = plans::exercises_for_plan(conn, plan.id)?;
            plan_details.push(PlanDetail {
                plan,
                trainer_name,
                exercises,
            });
        }

        Ok(Self {
            member,
            total_paid,
            attendance,
            plans: plan_details,
        })
    }
}
