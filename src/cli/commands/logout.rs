use crate::cli::commands::open_db;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;

    match SessionLogic::logout(&pool.conn, cfg) {
        Some(s) => success(format!("Signed out {}", s.identity.email)),
        None => info("No active session."),
    }
    Ok(())
}
