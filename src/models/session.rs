use super::identity::Identity;
use super::role::Role;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Live record of an authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub established_at: DateTime<Local>,
}

impl Session {
    pub fn new(identity: Identity, established_at: DateTime<Local>) -> Self {
        Self {
            identity,
            established_at,
        }
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }
}
