use super::{ask_confirmation, print_json};
use crate::cli::parser::{Commands, MemberAction};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::details::MemberDetails;
use crate::core::registry::RegistryLogic;
use crate::db::members;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::member::NewMember;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_status, colorize_optional};
use crate::utils::date::{self, fmt_datetime};
use crate::utils::formatting::{bold, duration_cell};
use crate::utils::money;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Member { action } = cmd else {
        return Ok(());
    };

    match action {
        MemberAction::Add {
            id,
            name,
            phone,
            age,
            joined,
        } => {
            // Validate before opening the database
            let age = RegistryLogic::parse_age(age)?;
            let today = date::today();
            let join_date = date::parse_or(joined.as_ref(), today)?;

            let mut pool = DbPool::new(&cfg.database)?;
            let status = RegistryLogic::add_member(
                &mut pool,
                NewMember {
                    id: id.clone(),
                    name: name.clone(),
                    phone: phone.clone(),
                    age,
                    join_date,
                },
                today,
                cfg.membership_days,
            )?;

            success(format!(
                "Member {} ({}) added, status {}.",
                id.trim(),
                name.trim(),
                status.to_db_str()
            ));
            list(&pool, cfg)?;
        }

        MemberAction::List { json } => {
            let pool = DbPool::new(&cfg.database)?;
            if *json {
                print_json(&members::list_members(&pool.conn)?)?;
            } else {
                list(&pool, cfg)?;
            }
        }

        MemberAction::Show { id, json } => {
            let pool = DbPool::new(&cfg.database)?;
            let details = MemberDetails::load(&pool.conn, id)?;
            if *json {
                print_json(&details)?;
            } else {
                print_details(&details, cfg);
            }
        }

        MemberAction::Del { id, yes } => {
            let prompt = format!(
                "Delete member {}? This permanently deletes all their payments, attendance records and workout plans.",
                id
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            let removed = DeleteLogic::member(&mut pool, id)?;

            success(format!(
                "Member {} ({}) deleted with {} payments, {} attendance records and {} workout plans.",
                removed.member.id,
                removed.member.name,
                removed.payments,
                removed.attendance,
                removed.plans
            ));
        }
    }

    Ok(())
}

fn list(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let rows = members::list_members(&pool.conn)?;
    if rows.is_empty() {
        info("No members registered.");
        return Ok(());
    }

    let mut table = Table::new(
        &["ID", "Name", "Phone", "Joined", "Age", "Status"],
        &cfg.separator_char,
    );
    for m in rows {
        table.add_row(vec![
            m.id,
            m.name,
            colorize_optional(&m.phone),
            m.join_date.to_string(),
            m.age.to_string(),
            format!(
                "{}{}{}",
                color_for_status(m.status.is_active()),
                m.status.to_db_str(),
                RESET
            ),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn print_details(d: &MemberDetails, cfg: &Config) {
    header("Member Summary");
    println!("Name:        {}", bold(&d.member.name));
    println!("Member ID:   {}", d.member.id);
    println!(
        "Status:      {}{}{}",
        color_for_status(d.member.status.is_active()),
        d.member.status.to_db_str(),
        RESET
    );
    println!(
        "Total Payments Made: {}",
        money(&cfg.currency_symbol, d.total_paid)
    );
    println!();

    header("Attendance History");
    let mut att = Table::new(&["Att. ID", "Check-in", "Check-out", "Duration"], &cfg.separator_char);
    for line in &d.attendance {
        att.add_row(vec![
            line.record.id.to_string(),
            fmt_datetime(&line.record.check_in),
            line.record
                .check_out
                .as_ref()
                .map(fmt_datetime)
                .unwrap_or_else(|| colorize_optional("N/A")),
            colorize_optional(&duration_cell(line.minutes)),
        ]);
    }
    if att.is_empty() {
        info("No attendance records.");
    } else {
        print!("{}", att.render());
    }
    println!();

    header("Workout Plans");
    let mut plans = Table::new(&["Plan", "Trainer", "Exercise", "Reps/Sets"], &cfg.separator_char);
    for p in &d.plans {
        let trainer = p.trainer_name.clone().unwrap_or_else(|| "N/A".into());
        if p.exercises.is_empty() {
            plans.add_row(vec![
                p.plan.id.to_string(),
                trainer,
                colorize_optional("N/A"),
                colorize_optional("N/A"),
            ]);
            continue;
        }
        for e in &p.exercises {
            plans.add_row(vec![
                p.plan.id.to_string(),
                trainer.clone(),
                e.exercise_name.clone(),
                e.reps_sets_info.clone(),
            ]);
        }
    }
    if plans.is_empty() {
        info("No trainer assigned, no exercises added.");
    } else {
        print!("{}", plans.render());
    }
}
