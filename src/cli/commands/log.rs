use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Log { print: true } => {
            let pool = open_db(cfg)?;
            LogLogic::print_log(&pool.conn)?;
        }
        Commands::Log { print: false } => info("Nothing to do: use `log --print`."),
        _ => {}
    }
    Ok(())
}
