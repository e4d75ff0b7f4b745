//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::tracker::{Transition, WorkStatus};
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
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Session storage unavailable: {0}")]
    PersistenceUnavailable(String),

    // ---------------------------
    // Authentication / authorization
    // ---------------------------
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Not logged in: run `planningpro login` first")]
    NotAuthenticated,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Password hashing error: {0}")]
    Hash(String),

    // ---------------------------
    // Time tracking
    // ---------------------------
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: WorkStatus,
        action: Transition,
    },

    #[error("A time report was already filed for {0}")]
    DayAlreadyReported(String),

    #[error("Duplicate time report for {employee} on {date}")]
    DuplicateReport { employee: String, date: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid account status: {0}")]
    InvalidStatus(String),

    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    // ---------------------------
    // Directory management
    // ---------------------------
    #[error("An account with email {0} already exists")]
    IdentityExists(String),

    #[error("No account with email {0}")]
    IdentityNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
