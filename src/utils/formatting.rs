//! Formatting utilities used for CLI outputs.

use rust_decimal::Decimal;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Monetary value with two decimals, e.g. `₹500.00`.
pub fn money(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Minutes as `HHh MMm`, e.g. `01h 30m`.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    format!("{:02}h {:02}m", abs_m / 60, abs_m % 60)
}

/// Duration cell: minutes and readable form, or N/A for an open session.
pub fn duration_cell(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) => format!("{} min ({})", m, mins2readable(m)),
        None => "N/A".to_string(),
    }
}
