//! Directory management, reserved to admin sessions.

use crate::db::identities::{self, NewIdentity};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::identity::{DirectoryEntry, Identity};
use crate::models::role::AccountStatus;
use crate::models::session::Session;
use regex::Regex;
use rusqlite::Connection;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

pub const MIN_SECRET_LEN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn list(conn: &Connection, search: Option<&str>) -> AppResult<Vec<DirectoryEntry>> {
        identities::list_identities(conn, search)
    }

    pub fn add(conn: &Connection, actor: &Session, mut new: NewIdentity) -> AppResult<Identity> {
        new.email = new.email.trim().to_string();
        new.given_name = new.given_name.trim().to_string();
        new.family_name = new.family_name.trim().to_string();

        if !is_valid_email(&new.email) {
            return Err(AppError::InvalidEmail(new.email));
        }
        if new.given_name.is_empty() || new.family_name.is_empty() {
            return Err(AppError::Other("given and family name are required".into()));
        }
        if new.secret.chars().count() < MIN_SECRET_LEN {
            return Err(AppError::Other(format!(
                "password must be at least {MIN_SECRET_LEN} characters"
            )));
        }

        let identity = identities::insert_identity(conn, &new)?;

        ttlog_quiet(
            conn,
            "employee_add",
            &identity.email,
            &format!(
                "{} added {} as {}",
                actor.identity.email,
                identity.display_name(),
                identity.role
            ),
        );
        Ok(identity)
    }

    pub fn set_status(
        conn: &Connection,
        actor: &Session,
        email: &str,
        status: AccountStatus,
    ) -> AppResult<()> {
        if status == AccountStatus::Inactive && email == actor.identity.email {
            return Err(AppError::Forbidden(
                "an admin cannot deactivate their own account".into(),
            ));
        }

        identities::set_status(conn, email, status)?;

        ttlog_quiet(
            conn,
            "employee_status",
            email,
            &format!("{} set status to {}", actor.identity.email, status),
        );
        Ok(())
    }

    pub fn remove(conn: &Connection, actor: &Session, email: &str) -> AppResult<Identity> {
        if email == actor.identity.email {
            return Err(AppError::Forbidden(
                "an admin cannot remove their own account".into(),
            ));
        }

        let removed = identities::delete_identity(conn, email)?;

        ttlog_quiet(
            conn,
            "employee_remove",
            email,
            &format!("{} removed {}", actor.identity.email, removed.display_name()),
        );
        Ok(removed)
    }
}
