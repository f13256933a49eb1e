use super::{ask_confirmation, print_json};
use crate::cli::parser::{Commands, TrainerAction};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::registry::RegistryLogic;
use crate::db::pool::DbPool;
use crate::db::trainers;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Trainer { action } = cmd else {
        return Ok(());
    };

    match action {
        TrainerAction::Add {
            name,
            salary,
            hired,
        } => {
            let salary = RegistryLogic::parse_salary(salary)?;
            let hired = date::parse_or(hired.as_ref(), date::today())?;

            let mut pool = DbPool::new(&cfg.database)?;
            let id = RegistryLogic::add_trainer(&mut pool, name, salary, hired)?;

            success(format!("Trainer {} added with id {}.", name.trim(), id));
            list(&pool, cfg)?;
        }

        TrainerAction::List { json } => {
            let pool = DbPool::new(&cfg.database)?;
            if *json {
                print_json(&trainers::list_trainers(&pool.conn)?)?;
            } else {
                list(&pool, cfg)?;
            }
        }

        TrainerAction::Del { trainer, yes } => {
            let prompt = format!(
                "Delete trainer {}? This permanently deletes all workout plans assigned to them.",
                trainer
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            let removed = DeleteLogic::trainer(&mut pool, trainer)?;

            success(format!(
                "Trainer {} (id {}) deleted with {} workout plans.",
                removed.trainer.name, removed.trainer.id, removed.plans
            ));
        }
    }

    Ok(())
}

fn list(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let rows = trainers::list_trainers(&pool.conn)?;
    if rows.is_empty() {
        info("No trainers registered.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "Name", "Salary", "Hired"], &cfg.separator_char);
    for t in rows {
        table.add_row(vec![
            t.id.to_string(),
            t.name,
            money(&cfg.currency_symbol, t.salary),
            t.date_hired.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
