use crate::config::Config;
use crate::core::auth::SessionManager;
use crate::db::identities::{DbDirectory, touch_last_login};
use crate::db::log::ttlog_quiet;
use crate::db::slot::DbSessionSlot;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Session manager wired to the SQLite directory and key/value slot.
pub type DbSessionManager<'a> = SessionManager<DbDirectory<'a>, DbSessionSlot<'a>>;

pub struct SessionLogic;

impl SessionLogic {
    /// Boot a manager, restoring whatever session the slot holds.
    pub fn manager<'a>(conn: &'a Connection, cfg: &Config) -> DbSessionManager<'a> {
        SessionManager::boot(
            DbDirectory::new(conn),
            DbSessionSlot::new(conn, cfg.session_key.clone()),
        )
    }

    pub fn login(conn: &Connection, cfg: &Config, email: &str, secret: &str) -> AppResult<Session> {
        let mut manager = Self::manager(conn, cfg);

        match manager.login(email.trim(), secret) {
            Ok(session) => {
                if let Err(e) = touch_last_login(conn, &session.identity.id) {
                    warning(format!("Could not record last login: {e}"));
                }
                ttlog_quiet(
                    conn,
                    "login",
                    &session.identity.email,
                    &format!("Logged in as {}", session.role()),
                );
                Ok(session)
            }
            Err(e) => {
                if matches!(e, AppError::InvalidCredentials | AppError::AccountInactive) {
                    ttlog_quiet(conn, "login_failed", email.trim(), &e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Drop the current session; returns the one that was active, if any.
    pub fn logout(conn: &Connection, cfg: &Config) -> Option<Session> {
        let mut manager = Self::manager(conn, cfg);
        let previous = manager.current().cloned();
        manager.logout();

        if let Some(s) = &previous {
            ttlog_quiet(conn, "logout", &s.identity.email, "Logged out");
        }
        previous
    }
}
