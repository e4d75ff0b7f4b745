//! `kv_slot` table: durable key/value slot holding the session snapshot.

use crate::core::auth::SessionStore;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const DEFAULT_SESSION_KEY: &str = "planningpro_user";

pub struct DbSessionSlot<'a> {
    conn: &'a Connection,
    key: String,
}

impl<'a> DbSessionSlot<'a> {
    pub fn new(conn: &'a Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn unavailable(e: rusqlite::Error) -> AppError {
    AppError::PersistenceUnavailable(e.to_string())
}

impl SessionStore for DbSessionSlot<'_> {
    fn load(&self) -> AppResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_slot WHERE key = ?1",
                [&self.key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(unavailable)
    }

    fn save(&self, snapshot: &str) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_slot (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                               updated_at = excluded.updated_at",
                params![self.key, snapshot, Local::now().to_rfc3339()],
            )
            .map(|_| ())
            .map_err(unavailable)
    }

    fn clear(&self) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_slot WHERE key = ?1", [&self.key])
            .map(|_| ())
            .map_err(unavailable)
    }
}
