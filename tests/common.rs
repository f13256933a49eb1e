#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use gymkeeper::db::initialize::init_db;
use gymkeeper::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gk() -> Command {
    cargo_bin_cmd!("gymkeeper")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymkeeper.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI (test mode leaves the config alone)
pub fn init_db_cli(db_path: &str) {
    gk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh, migrated in-memory database opened through the library API
pub fn open_test_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

pub fn count(pool: &DbPool, table: &str) -> i64 {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .expect("count rows")
}
