use super::print_json;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payment::PaymentLogic;
use crate::db::payments;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::status::PaymentStatus;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::money;
use crate::utils::table::Table;

/// Handle `pay`: record a payment, then show the member's refreshed status.
pub fn handle_pay(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay {
        member,
        amount,
        date: pay_date,
        pending,
    } = cmd
    {
        // Input errors are reported before touching the database
        let amount = PaymentLogic::parse_amount(amount)?;
        let today = date::today();
        let pay_date = date::parse_or(pay_date.as_ref(), today)?;
        let status = if *pending {
            PaymentStatus::Pending
        } else {
            PaymentStatus::Paid
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let recorded = PaymentLogic::record(
            &mut pool,
            member,
            amount,
            pay_date,
            status,
            today,
            cfg.membership_days,
        )?;

        success(format!(
            "Payment of {} for {} recorded (id {}).",
            money(&cfg.currency_symbol, recorded.amount),
            member,
            recorded.payment_id
        ));

        if recorded.status_changed {
            success(format!(
                "Member {} is now {}.",
                member,
                recorded.member_status.to_db_str()
            ));
        } else {
            info(format!(
                "Member {} status: {}.",
                member,
                recorded.member_status.to_db_str()
            ));
        }
    }

    Ok(())
}

/// Handle `payments`: list payments, optionally for one member.
pub fn handle_list(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payments { member, json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let rows = payments::list_payments(&pool.conn, member.as_deref())?;

        if *json {
            return print_json(&rows);
        }

        if rows.is_empty() {
            info("No payments recorded.");
            return Ok(());
        }

        let mut table = Table::new(
            &["ID", "Member", "Amount", "Date", "Status"],
            &cfg.separator_char,
        );
        for p in rows {
            table.add_row(vec![
                p.id.to_string(),
                p.member_id,
                money(&cfg.currency_symbol, p.amount),
                p.date.to_string(),
                p.status.to_db_str().to_string(),
            ]);
        }
        print!("{}", table.render());

        if let Some(id) = member {
            let total = PaymentLogic::total(&pool.conn, id)?;
            println!("Total: {}", money(&cfg.currency_symbol, total));
        }
    }

    Ok(())
}
