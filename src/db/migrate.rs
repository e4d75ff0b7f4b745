use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// One schema step. Applied steps are recorded in `log` with
/// `operation = 'migration_applied'` and `target = version`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_identities",
        description: "Created identities table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS identities (
            id           TEXT PRIMARY KEY,
            email        TEXT NOT NULL UNIQUE,
            given_name   TEXT NOT NULL,
            family_name  TEXT NOT NULL,
            role         TEXT NOT NULL CHECK(role IN ('admin','employee')),
            status       TEXT NOT NULL DEFAULT 'active' CHECK(status IN ('active','inactive')),
            secret_hash  TEXT NOT NULL,
            hired_on     TEXT,
            last_login   TEXT,
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0002_create_kv_slot",
        description: "Created kv_slot table for the saved session",
        sql: r#"
        CREATE TABLE IF NOT EXISTS kv_slot (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0003_create_time_state",
        description: "Created time_state table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_state (
            employee_id TEXT PRIMARY KEY,
            state       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250301_0004_create_time_reports",
        description: "Created time_reports and report_breaks tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_reports (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id         TEXT NOT NULL,
            date                TEXT NOT NULL,
            day_start           TEXT NOT NULL,
            day_end             TEXT NOT NULL,
            total_work_seconds  INTEGER NOT NULL CHECK(total_work_seconds >= 0),
            total_break_seconds INTEGER NOT NULL CHECK(total_break_seconds >= 0),
            created_at          TEXT NOT NULL,
            UNIQUE(employee_id, date)
        );

        CREATE TABLE IF NOT EXISTS report_breaks (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id        INTEGER NOT NULL REFERENCES time_reports(id) ON DELETE CASCADE,
            position         INTEGER NOT NULL,
            start            TEXT NOT NULL,
            end              TEXT NOT NULL,
            duration_seconds INTEGER NOT NULL CHECK(duration_seconds >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_time_reports_date ON time_reports(date);
        CREATE INDEX IF NOT EXISTS idx_report_breaks_report ON report_breaks(report_id, position);
        "#,
    },
    Migration {
        version: "20250412_0005_create_sequences",
        description: "Created sequences table for identity ids",
        sql: r#"
        CREATE TABLE IF NOT EXISTS sequences (
            name  TEXT PRIMARY KEY,
            value INTEGER NOT NULL
        );

        INSERT OR IGNORE INTO sequences (name, value)
        SELECT 'identities', MAX(
            COALESCE((SELECT MAX(CAST(id AS INTEGER)) FROM identities), 0),
            COALESCE((SELECT MAX(CAST(employee_id AS INTEGER)) FROM time_reports), 0)
        );
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions not yet recorded in `log`, in application order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns how many steps ran.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    Ok(applied)
}
