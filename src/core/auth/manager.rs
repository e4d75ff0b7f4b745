use super::directory::IdentityDirectory;
use super::gate;
use super::secret::verify_secret;
use super::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::route::{AuthState, Navigation, Route, Section};
use crate::models::session::Session;
use crate::ui::messages::warning;
use chrono::Local;

/// Owns the current session for the lifetime of one process.
///
/// Built at boot with [`SessionManager::boot`], which restores any saved
/// snapshot; torn down by [`SessionManager::logout`].
pub struct SessionManager<D, S> {
    directory: D,
    store: S,
    current: Option<Session>,
}

impl<D: IdentityDirectory, S: SessionStore> SessionManager<D, S> {
    pub fn new(directory: D, store: S) -> Self {
        Self {
            directory,
            store,
            current: None,
        }
    }

    pub fn boot(directory: D, store: S) -> Self {
        let mut manager = Self::new(directory, store);
        manager.restore_session();
        manager
    }

    /// Authenticate `email`/`secret` and establish a session.
    ///
    /// Email lookup is exact. An inactive account is rejected before its
    /// secret is looked at.
    pub fn login(&mut self, email: &str, secret: &str) -> AppResult<Session> {
        if email.is_empty() || secret.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let entry = self
            .directory
            .find_by_email(email)?
            .ok_or(AppError::InvalidCredentials)?;

        if !entry.identity.status.is_active() {
            return Err(AppError::AccountInactive);
        }

        if !verify_secret(secret, &entry.secret_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let session = Session::new(entry.identity, Local::now());

        if let Err(e) = self.persist(&session) {
            warning(format!("Session not saved, next run will ask to log in again: {e}"));
        }

        self.current = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self) {
        self.current = None;
        if let Err(e) = self.store.clear() {
            warning(format!("Could not clear the saved session: {e}"));
        }
    }

    /// Re-establish the saved session, if any. Never fails.
    pub fn restore_session(&mut self) -> Option<Session> {
        let restored = match self.store.load() {
            Ok(Some(snapshot)) => serde_json::from_str::<Session>(&snapshot).ok(),
            Ok(None) | Err(_) => None,
        };
        self.current = restored.clone();
        restored
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn state(&self) -> AuthState {
        gate::auth_state(self.current())
    }

    pub fn navigate(&self, requested: Route) -> Navigation {
        gate::navigate(self.current(), requested)
    }

    pub fn require(&self, section: Section) -> AppResult<&Session> {
        gate::require_role(self.current(), section)
    }

    fn persist(&self, session: &Session) -> AppResult<()> {
        let snapshot = serde_json::to_string(session)
            .map_err(|e| AppError::PersistenceUnavailable(e.to_string()))?;
        self.store.save(&snapshot)
    }
}
