use crate::db::identities::seed_demo_accounts;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Schema plus the demo directory, when requested and the directory is empty.
/// Returns how many accounts were seeded.
pub fn init_db_with_seed(conn: &Connection, seed: bool) -> AppResult<usize> {
    init_db(conn)?;
    if seed {
        seed_demo_accounts(conn)
    } else {
        Ok(0)
    }
}
