//! gymkeeper library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
        Commands::Member { .. } => commands::member::handle(cmd, cfg),
        Commands::Trainer { .. } => commands::trainer::handle(cmd, cfg),
        Commands::Exercise { .. } => commands::exercise::handle(cmd, cfg),
        Commands::Pay { .. } => commands::payment::handle_pay(cmd, cfg),
        Commands::Payments { .. } => commands::payment::handle_list(cmd, cfg),
        Commands::Checkin { .. } => commands::attendance::handle_checkin(cmd, cfg),
        Commands::Checkout { .. } => commands::attendance::handle_checkout(cmd, cfg),
        Commands::Present { .. } => commands::attendance::handle_present(cmd, cfg),
        Commands::Duration { .. } => commands::attendance::handle_duration(cmd, cfg),
        Commands::Plan { .. } => commands::plan::handle(cmd, cfg),
        Commands::Status { .. } => commands::status::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and passed down
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_db_path(custom_db)?
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
