//! Creation of members, trainers and exercises, with input validation done
//! before any statement reaches the store.

use crate::core::calculator::membership::status_on;
use crate::db::pool::DbPool;
use crate::db::{exercises, members, trainers};
use crate::errors::{AppError, AppResult};
use crate::models::member::NewMember;
use crate::models::status::MemberStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct RegistryLogic;

fn require_text(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(v.to_string())
}

impl RegistryLogic {
    pub fn parse_age(input: &str) -> AppResult<u32> {
        input
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::Validation(format!("age must be a number, got '{}'", input)))
    }

    pub fn parse_salary(input: &str) -> AppResult<Decimal> {
        let raw = input.trim();
        let mut salary = Decimal::from_str(raw)
            .map_err(|_| AppError::InvalidAmount(format!("salary '{}' is not a number", raw)))?;
        if salary < Decimal::ZERO {
            return Err(AppError::InvalidAmount(format!(
                "salary '{}' must not be negative",
                raw
            )));
        }
        salary.rescale(2);
        Ok(salary)
    }

    /// Register a member; the initial status follows the membership rule.
    pub fn add_member(
        pool: &mut DbPool,
        new: NewMember,
        today: NaiveDate,
        membership_days: i64,
    ) -> AppResult<MemberStatus> {
        let member = NewMember {
            id: require_text("member id", &new.id)?,
            name: require_text("name", &new.name)?,
            phone: new.phone.trim().to_string(),
            ..new
        };

        let status = status_on(today, member.join_date, None, membership_days);

        pool.transaction(|tx| {
            members::insert_member(tx, &member, status)?;
            Ok(status)
        })
    }

    pub fn add_trainer(
        pool: &mut DbPool,
        name: &str,
        salary: Decimal,
        date_hired: NaiveDate,
    ) -> AppResult<i64> {
        let name = require_text("name", name)?;
        if salary < Decimal::ZERO {
            return Err(AppError::InvalidAmount(salary.to_string()));
        }

        pool.transaction(|tx| trainers::insert_trainer(tx, &name, salary, date_hired))
    }

    pub fn add_exercise(pool: &mut DbPool, name: &str) -> AppResult<i64> {
        let name = require_text("exercise name", name)?;
        pool.transaction(|tx| exercises::insert_exercise(tx, &name))
    }
}
