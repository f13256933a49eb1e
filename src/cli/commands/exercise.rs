use super::{ask_confirmation, print_json};
use crate::cli::parser::{Commands, ExerciseAction};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::registry::RegistryLogic;
use crate::db::exercises;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Exercise { action } = cmd else {
        return Ok(());
    };

    match action {
        ExerciseAction::Add { name } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let id = RegistryLogic::add_exercise(&mut pool, name)?;
            success(format!("Exercise '{}' added with id {}.", name.trim(), id));
        }

        ExerciseAction::List { json } => {
            let pool = DbPool::new(&cfg.database)?;
            let rows = exercises::list_exercises(&pool.conn)?;

            if *json {
                print_json(&rows)?;
            } else if rows.is_empty() {
                info("No exercises registered.");
            } else {
                let mut table = Table::new(&["ID", "Exercise"], &cfg.separator_char);
                for e in rows {
                    table.add_row(vec![e.id.to_string(), e.name]);
                }
                print!("{}", table.render());
            }
        }

        ExerciseAction::Del { exercise, yes } => {
            let prompt = format!(
                "Delete exercise {}? It will be removed from every workout plan.",
                exercise
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            let (removed, usages) = DeleteLogic::exercise(&mut pool, exercise)?;
            success(format!(
                "Exercise '{}' deleted and removed from {} plans.",
                removed.name, usages
            ));
        }
    }

    Ok(())
}
