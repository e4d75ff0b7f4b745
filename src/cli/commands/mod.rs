pub mod clock;
pub mod config;
pub mod db;
pub mod employee;
pub mod export;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod open;
pub mod report;
pub mod whoami;

use crate::config::Config;
use crate::db::migrate::pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Open the configured database, refusing one that is missing or behind on
/// migrations.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    if !Path::new(&cfg.database).exists() {
        return Err(AppError::Migration(format!(
            "database {} not found: run `planningpro init` first",
            cfg.database
        )));
    }

    let pool = DbPool::new(&cfg.database)?;

    let pending = pending_migrations(&pool.conn)?;
    if !pending.is_empty() {
        return Err(AppError::Migration(format!(
            "{} pending migration(s): run `planningpro db --migrate`",
            pending.len()
        )));
    }

    Ok(pool)
}
