use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db_with_seed;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the demo accounts, unless disabled
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let no_seed = matches!(cli.command, Commands::Init { no_seed: true });

    println!("⚙️  Initializing PlanningPro…");

    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    let seeded = init_db_with_seed(&pool.conn, cfg.seed_demo_accounts && !no_seed)?;

    success(format!("Database initialized at {}", &db_path));

    if seeded > 0 {
        info(format!("{seeded} demo account(s) created:"));
        println!("   admin@planningpro.com   / admin123   (admin)");
        println!("   employe@planningpro.com / employe123 (employee)");
    }

    ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {db_path} ({seeded} demo account(s))"),
    );

    println!("🎉 PlanningPro initialization completed!");
    Ok(())
}
