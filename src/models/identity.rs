use super::role::{AccountStatus, Role};
use serde::{Deserialize, Serialize};

/// A person known to the directory. Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
    pub role: Role,
    pub status: AccountStatus,
}

impl Identity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Directory row: the identity plus the PHC string of its secret.
///
/// Only the session manager looks at `secret_hash`; everything handed out of a
/// login is the bare `Identity`.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub identity: Identity,
    pub secret_hash: String,
    pub hired_on: Option<String>,
    pub last_login: Option<String>,
}
