//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use rusqlite::ffi;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Cannot connect to database '{path}': {reason}")]
    Connection { path: String, reason: String },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation (caught before touching the store)
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Constraint violations
    // ---------------------------
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Check-in refused for member {0}: membership is expired. Please make a payment.")]
    MembershipExpired(String),

    #[error("Member {0} is already checked in")]
    AlreadyCheckedIn(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("{0} not found")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Coarse error categories shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConnectionFailure,
    ValidationFailure,
    DuplicateEntry,
    DomainRuleViolation,
    ConstraintViolation,
    NotFound,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Connection { .. } => ErrorKind::ConnectionFailure,
            AppError::InvalidDate(_) | AppError::InvalidAmount(_) | AppError::Validation(_) => {
                ErrorKind::ValidationFailure
            }
            AppError::Duplicate(_) => ErrorKind::DuplicateEntry,
            AppError::MembershipExpired(_) | AppError::AlreadyCheckedIn(_) => {
                ErrorKind::DomainRuleViolation
            }
            AppError::Constraint(_) => ErrorKind::ConstraintViolation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Internal,
        }
    }

    /// Translate a failed write into a domain error.
    ///
    /// `what` names the row being written, e.g. "exercise 3 in plan 7".
    pub fn from_write(err: rusqlite::Error, what: &str) -> Self {
        if let rusqlite::Error::SqliteFailure(ref e, ref msg) = err {
            let detail = msg.clone().unwrap_or_else(|| e.to_string());
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return AppError::Duplicate(format!("{what} already exists"));
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return AppError::Constraint(format!(
                        "{what} references a row that does not exist ({detail})"
                    ));
                }
                ffi::SQLITE_CONSTRAINT_CHECK | ffi::SQLITE_CONSTRAINT_NOTNULL => {
                    return AppError::Constraint(format!("{what} rejected: {detail}"));
                }
                _ => {}
            }
        }
        AppError::Db(err)
    }
}
