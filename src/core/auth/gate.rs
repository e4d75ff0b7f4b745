//! Role gate in front of every console section.

use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::route::{AuthState, Navigation, Route, Section};
use crate::models::session::Session;

/// True iff there is a session and it holds `required` (or nothing is required).
pub fn authorize(session: Option<&Session>, required: Option<Role>) -> bool {
    match session {
        None => false,
        Some(s) => required.is_none_or(|r| r == s.role()),
    }
}

pub fn auth_state(session: Option<&Session>) -> AuthState {
    match session.map(Session::role) {
        None => AuthState::Unauthenticated,
        Some(Role::Admin) => AuthState::AuthenticatedAdmin,
        Some(Role::Employee) => AuthState::AuthenticatedEmployee,
    }
}

/// Resolve a navigation request against the current session.
///
/// - unauthenticated: every section redirects to the login entry point
/// - wrong role: redirect to the identity's own home
/// - login page while authenticated: redirect home
pub fn navigate(session: Option<&Session>, requested: Route) -> Navigation {
    match (session, requested) {
        (None, Route::Login) => Navigation::Allowed(Route::Login),
        (None, Route::Section(_)) => Navigation::Redirected {
            requested,
            to: Route::Login,
        },
        (Some(s), Route::Login) => Navigation::Redirected {
            requested,
            to: Route::home_of(s.role()),
        },
        (Some(s), Route::Section(section)) => {
            if authorize(Some(s), Some(section.required_role())) {
                Navigation::Allowed(requested)
            } else {
                Navigation::Redirected {
                    requested,
                    to: Route::home_of(s.role()),
                }
            }
        }
    }
}

/// Command-side variant of the gate: hand back the session or say why not.
pub fn require_role(session: Option<&Session>, section: Section) -> AppResult<&Session> {
    let session = session.ok_or(AppError::NotAuthenticated)?;

    if authorize(Some(session), Some(section.required_role())) {
        Ok(session)
    } else {
        Err(AppError::Forbidden(format!(
            "{} is reserved to {} accounts",
            Route::Section(section),
            section.required_role()
        )))
    }
}
