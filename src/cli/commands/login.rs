use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::models::route::Route;
use crate::ui::messages::{detail, success};
use std::io::{self, BufRead, Write};

fn read_password() -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let secret = match password {
            Some(p) => p.clone(),
            None => read_password()?,
        };

        let pool = open_db(cfg)?;
        let session = SessionLogic::login(&pool.conn, cfg, email, &secret)?;

        success(format!(
            "Signed in as {} ({})",
            session.identity.display_name(),
            session.role()
        ));
        detail(format!("Home: {}", Route::home_of(session.role())));
    }
    Ok(())
}
