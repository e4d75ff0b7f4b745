use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = open_db(cfg)?;
        let manager = SessionLogic::manager(&pool.conn, cfg);
        let session = manager.current().ok_or(AppError::NotAuthenticated)?;

        ExportLogic::export(&pool.conn, session, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
