use super::{ask_confirmation, print_json};
use crate::cli::parser::{Commands, PlanAction};
use crate::config::Config;
use crate::core::plan::PlanLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Plan { action } = cmd else {
        return Ok(());
    };

    match action {
        PlanAction::Add {
            member,
            trainer,
            start,
            end,
        } => {
            let start_date =
                date::parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;
            let end_date = date::parse_optional(end.as_ref())?;

            let mut pool = DbPool::new(&cfg.database)?;
            let id = PlanLogic::create(&mut pool, member, trainer, start_date, end_date)?;

            success(format!("Workout plan {} created for member {}.", id, member));
            list(&pool, cfg)?;
        }

        PlanAction::List { json } => {
            let pool = DbPool::new(&cfg.database)?;
            if *json {
                print_json(&PlanLogic::list(&pool.conn)?)?;
            } else {
                list(&pool, cfg)?;
            }
        }

        PlanAction::Show { plan } => {
            let pool = DbPool::new(&cfg.database)?;
            show(&pool, cfg, *plan)?;
        }

        PlanAction::AddExercise {
            plan,
            exercise,
            reps,
        } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let added = PlanLogic::add_exercise(&mut pool, *plan, exercise, reps)?;

            success(format!(
                "Added '{}' ({}) to plan {}.",
                added.exercise_name, added.reps_sets_info, plan
            ));
            show(&pool, cfg, *plan)?;
        }

        PlanAction::RemoveExercise {
            plan,
            exercise,
            yes,
        } => {
            let prompt = format!("Remove '{}' from plan {}?", exercise, plan);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            if PlanLogic::remove_exercise(&mut pool, *plan, exercise)? {
                success(format!("Removed '{}' from plan {}.", exercise, plan));
            } else {
                info(format!("'{}' is not part of plan {}.", exercise, plan));
            }
            show(&pool, cfg, *plan)?;
        }

        PlanAction::Del { plan, yes } => {
            let prompt = format!("Delete workout plan {} and its exercises?", plan);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            let removed = PlanLogic::delete(&mut pool, *plan)?;
            success(format!(
                "Workout plan {} deleted with {} exercises.",
                plan, removed
            ));
        }
    }

    Ok(())
}

fn list(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let rows = PlanLogic::list(&pool.conn)?;
    if rows.is_empty() {
        info("No workout plans.");
        return Ok(());
    }

    let mut table = Table::new(
        &["Plan", "Member", "Trainer", "Start", "End"],
        &cfg.separator_char,
    );
    for p in rows {
        table.add_row(vec![
            p.id.to_string(),
            p.member_name,
            p.trainer_name,
            p.start_date.to_string(),
            p.end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| colorize_optional("N/A")),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn show(pool: &DbPool, cfg: &Config, plan_id: i64) -> AppResult<()> {
    let (plan, exercises) = PlanLogic::show(&pool.conn, plan_id)?;

    println!(
        "Plan {}: member {}, trainer {}, {} → {}",
        plan.id,
        plan.member_id,
        plan.trainer_id,
        plan.start_date,
        plan.end_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".into())
    );

    if exercises.is_empty() {
        info("No exercises in this plan.");
        return Ok(());
    }

    let mut table = Table::new(&["Exercise", "Reps/Sets", "ID"], &cfg.separator_char);
    for e in exercises {
        table.add_row(vec![e.exercise_name, e.reps_sets_info, e.exercise_id.to_string()]);
    }
    print!("{}", table.render());
    Ok(())
}
