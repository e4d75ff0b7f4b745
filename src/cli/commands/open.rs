use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::models::route::{Navigation, Route};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Open { path } = cmd {
        let requested = Route::parse(path)?;

        let pool = open_db(cfg)?;
        let manager = SessionLogic::manager(&pool.conn, cfg);

        match manager.navigate(requested) {
            Navigation::Allowed(route) => success(format!("Opening {route}")),
            Navigation::Redirected { requested, to } => {
                warning(format!("{requested} is not available, redirected to {to}"))
            }
        }
    }
    Ok(())
}
