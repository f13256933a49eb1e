//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One connection per command; every unit of work runs inside
//! [`DbPool::transaction`], which commits on `Ok` and rolls back on `Err`.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    pub path: String,
}

impl DbPool {
    /// Open an existing database. A missing file is a connection failure,
    /// never an implicit create.
    pub fn new(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::Connection {
                path: path.to_string(),
                reason: "database file not found (run `gymkeeper init` first)".into(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::Connection {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Self::configure(conn, path)
    }

    /// Open (creating if needed) the database file. Used by `init`.
    pub fn create(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path).map_err(|e| AppError::Connection {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Self::configure(conn, path)
    }

    /// Private in-memory database; the library tests run on it.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, ":memory:")
    }

    fn configure(conn: Connection, path: &str) -> AppResult<Self> {
        // Cascading deletes depend on this pragma; it is per-connection.
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| AppError::Connection {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Execute `func` inside a write transaction.
    ///
    /// The transaction is committed when `func` returns `Ok`; on `Err` the
    /// guard is dropped and SQLite rolls everything back.
    pub fn transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction) -> AppResult<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
