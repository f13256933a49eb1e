use super::ask_confirmation;
use crate::cli::parser::{Commands, StatusAction};
use crate::config::Config;
use crate::core::membership::MembershipLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Status { action } = cmd else {
        return Ok(());
    };

    match action {
        StatusAction::Refresh { yes } => {
            let prompt = format!(
                "Recompute the status of every member (active = paid within {} days)?",
                cfg.membership_days
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            let report = MembershipLogic::refresh_all(&mut pool, date::today(), cfg.membership_days)?;

            success(format!(
                "Status refresh completed: {} members checked, {} changed.",
                report.checked,
                report.changed()
            ));
            if !report.activated.is_empty() {
                info(format!("Now active: {}", report.activated.join(", ")));
            }
            if !report.deactivated.is_empty() {
                info(format!("Now inactive: {}", report.deactivated.join(", ")));
            }
        }
    }

    Ok(())
}
