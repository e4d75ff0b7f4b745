use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) DIRECTORY
    //
    let (admins, employees, inactive): (i64, i64, i64) = pool.conn.query_row(
        "SELECT
            COALESCE(SUM(role = 'admin'), 0),
            COALESCE(SUM(role = 'employee'), 0),
            COALESCE(SUM(status = 'inactive'), 0)
         FROM identities",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    println!(
        "{}• Accounts:{} {}{}{} admin, {}{}{} employee ({} inactive)",
        CYAN, RESET, GREEN, admins, RESET, GREEN, employees, RESET, inactive
    );

    //
    // 3) REPORTS
    //
    let reports: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_reports", [], |row| row.get(0))?;
    let running: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_state", [], |row| row.get(0))?;
    println!(
        "{}• Time reports:{} {}{}{} ({} tracker(s) in progress)",
        CYAN, RESET, GREEN, reports, RESET, running
    );

    //
    // 4) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM time_reports",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
