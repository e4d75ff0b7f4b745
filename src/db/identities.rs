//! `identities` table: the directory behind the login.

use crate::core::auth::IdentityDirectory;
use crate::core::auth::secret::hash_secret;
use crate::errors::{AppError, AppResult};
use crate::models::identity::{DirectoryEntry, Identity};
use crate::models::role::{AccountStatus, Role};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, email, given_name, family_name, role, status,
        secret_hash, hired_on, last_login
 FROM identities";

/// Input for a new directory entry; the secret is hashed on insert.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub role: Role,
    pub status: AccountStatus,
    pub secret: String,
    pub hired_on: Option<String>,
}

/// Directory backed by the `identities` table.
pub struct DbDirectory<'a> {
    conn: &'a Connection,
}

impl<'a> DbDirectory<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl IdentityDirectory for DbDirectory<'_> {
    fn find_by_email(&self, email: &str) -> AppResult<Option<DirectoryEntry>> {
        find_by_email(self.conn, email)
    }
}

fn conversion_error(msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::Other(msg)),
    )
}

pub fn map_row(row: &Row) -> Result<DirectoryEntry> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str)
        .ok_or_else(|| conversion_error(format!("Invalid role: {role_str}")))?;

    let status_str: String = row.get("status")?;
    let status = AccountStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(format!("Invalid status: {status_str}")))?;

    Ok(DirectoryEntry {
        identity: Identity {
            id: row.get("id")?,
            email: row.get("email")?,
            given_name: row.get("given_name")?,
            family_name: row.get("family_name")?,
            role,
            status,
        },
        secret_hash: row.get("secret_hash")?,
        hired_on: row.get("hired_on")?,
        last_login: row.get("last_login")?,
    })
}

pub fn find_by_email(conn: &Connection, email: &str) -> AppResult<Option<DirectoryEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_COLUMNS} WHERE email = ?1"))?;
    Ok(stmt.query_row([email], map_row).optional()?)
}

/// All entries, optionally filtered by a case-insensitive term on names and email.
pub fn list_identities(conn: &Connection, search: Option<&str>) -> AppResult<Vec<DirectoryEntry>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS} ORDER BY role ASC, family_name ASC, given_name ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    let mut out = Vec::new();
    for r in rows {
        let entry = r?;
        let id = &entry.identity;
        if needle.is_empty()
            || id.given_name.to_lowercase().contains(&needle)
            || id.family_name.to_lowercase().contains(&needle)
            || id.email.to_lowercase().contains(&needle)
        {
            out.push(entry);
        }
    }
    Ok(out)
}

pub fn count_identities(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM identities", [], |row| row.get(0))?)
}

fn next_id(conn: &Connection) -> Result<String> {
    // ids of removed accounts stay attached to their filed reports
    let last: i64 = conn.query_row(
        "SELECT MAX(
            COALESCE((SELECT value FROM sequences WHERE name = 'identities'), 0),
            COALESCE((SELECT MAX(CAST(id AS INTEGER)) FROM identities), 0),
            COALESCE((SELECT MAX(CAST(employee_id AS INTEGER)) FROM time_reports), 0)
         )",
        [],
        |row| row.get(0),
    )?;
    let next = last + 1;

    conn.execute(
        "INSERT INTO sequences (name, value) VALUES ('identities', ?1)
         ON CONFLICT(name) DO UPDATE SET value = excluded.value",
        [next],
    )?;
    Ok(next.to_string())
}

pub fn insert_identity(conn: &Connection, new: &NewIdentity) -> AppResult<Identity> {
    if find_by_email(conn, &new.email)?.is_some() {
        return Err(AppError::IdentityExists(new.email.clone()));
    }

    let secret_hash = hash_secret(&new.secret)?;

    let tx = conn.unchecked_transaction()?;
    let id = next_id(&tx)?;

    tx.execute(
        "INSERT INTO identities
            (id, email, given_name, family_name, role, status, secret_hash, hired_on, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            id,
            new.email,
            new.given_name,
            new.family_name,
            new.role.to_db_str(),
            new.status.to_db_str(),
            secret_hash,
            new.hired_on,
            Local::now().to_rfc3339(),
        ],
    )?;
    tx.commit()?;

    Ok(Identity {
        id,
        email: new.email.clone(),
        given_name: new.given_name.clone(),
        family_name: new.family_name.clone(),
        role: new.role,
        status: new.status,
    })
}

pub fn set_status(conn: &Connection, email: &str, status: AccountStatus) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE identities SET status = ?1 WHERE email = ?2",
        params![status.to_db_str(), email],
    )?;
    if changed == 0 {
        return Err(AppError::IdentityNotFound(email.to_string()));
    }
    Ok(())
}

/// Remove an entry and its in-progress tracker. Filed reports stay.
pub fn delete_identity(conn: &Connection, email: &str) -> AppResult<Identity> {
    let entry = find_by_email(conn, email)?
        .ok_or_else(|| AppError::IdentityNotFound(email.to_string()))?;

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "DELETE FROM time_state WHERE employee_id = ?1",
        [&entry.identity.id],
    )?;
    tx.execute("DELETE FROM identities WHERE id = ?1", [&entry.identity.id])?;
    tx.commit()?;

    Ok(entry.identity)
}

pub fn touch_last_login(conn: &Connection, id: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE identities SET last_login = ?1 WHERE id = ?2",
        params![Local::now().to_rfc3339(), id],
    )?;
    Ok(())
}

/// Seed the two demo accounts when the directory is empty.
pub fn seed_demo_accounts(conn: &Connection) -> AppResult<usize> {
    if count_identities(conn)? > 0 {
        return Ok(0);
    }

    let demo = [
        NewIdentity {
            email: "admin@planningpro.com".into(),
            given_name: "Principal".into(),
            family_name: "Administrateur".into(),
            role: Role::Admin,
            status: AccountStatus::Active,
            secret: "admin123".into(),
            hired_on: None,
        },
        NewIdentity {
            email: "employe@planningpro.com".into(),
            given_name: "Jean".into(),
            family_name: "Dupont".into(),
            role: Role::Employee,
            status: AccountStatus::Active,
            secret: "employe123".into(),
            hired_on: Some("2023-01-15".into()),
        },
    ];

    for d in &demo {
        insert_identity(conn, d)?;
    }

    Ok(demo.len())
}
