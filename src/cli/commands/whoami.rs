use crate::cli::commands::open_db;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::models::route::Route;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let manager = SessionLogic::manager(&pool.conn, cfg);

    let Some(session) = manager.current() else {
        info("Not signed in.");
        return Ok(());
    };

    let who = &session.identity;
    println!("{CYAN}• Name:{RESET}   {}", who.display_name());
    println!("{CYAN}• Email:{RESET}  {}", who.email);
    println!("{CYAN}• Role:{RESET}   {}", who.role.label());
    println!(
        "{CYAN}• Since:{RESET}  {}",
        session.established_at.format("%Y-%m-%d %H:%M")
    );
    println!("{CYAN}• Home:{RESET}   {}", Route::home_of(who.role));
    Ok(())
}
