pub mod attendance;
pub mod config;
pub mod db;
pub mod exercise;
pub mod init;
pub mod log;
pub mod member;
pub mod payment;
pub mod plan;
pub mod status;
pub mod trainer;

use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::Serialize;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Print any list as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
