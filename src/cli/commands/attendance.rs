use super::print_json;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, CheckOut};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::{self, fmt_datetime};
use crate::utils::formatting::duration_cell;
use crate::utils::table::Table;

pub fn handle_checkin(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { member } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let id = AttendanceLogic::check_in(&mut pool, member, date::now(), cfg.membership_days)?;

        success(format!(
            "Member {} checked in successfully (attendance {}).",
            member, id
        ));
        print_present(&pool, cfg)?;
    }
    Ok(())
}

pub fn handle_checkout(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout { member } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match AttendanceLogic::check_out(&mut pool, member, date::now())? {
            CheckOut::Closed {
                attendance_id,
                minutes,
            } => {
                success(format!(
                    "Member {} checked out successfully (attendance {}, {}).",
                    member,
                    attendance_id,
                    duration_cell(minutes)
                ));
                print_present(&pool, cfg)?;
            }
            CheckOut::NotCheckedIn => {
                info(format!(
                    "No active check-in found for member {} to check out.",
                    member
                ));
            }
        }
    }
    Ok(())
}

pub fn handle_present(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Present { json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        if *json {
            print_json(&AttendanceLogic::present(&pool.conn)?)?;
        } else {
            print_present(&pool, cfg)?;
        }
    }
    Ok(())
}

pub fn handle_duration(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duration { attendance } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let minutes = AttendanceLogic::duration(&pool.conn, *attendance)?;
        println!("Attendance {}: {}", attendance, duration_cell(minutes));
    }
    Ok(())
}

/// The "currently in" view.
fn print_present(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let rows = AttendanceLogic::present(&pool.conn)?;
    if rows.is_empty() {
        info("Nobody is checked in.");
        return Ok(());
    }

    println!("Currently checked in:");
    let mut table = Table::new(&["Member ID", "Name", "Check-in"], &cfg.separator_char);
    for p in rows {
        table.add_row(vec![p.member_id, p.name, fmt_datetime(&p.check_in)]);
    }
    print!("{}", table.render());
    Ok(())
}
