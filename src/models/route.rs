//! Navigation surface: the role-scoped sections of the console.

use super::role::Role;
use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Overview,
    Employees,
    Tasks,
    Schedule,
    Meetings,
    Messaging,
    Reports,
}

impl AdminSection {
    pub const ALL: [AdminSection; 7] = [
        AdminSection::Overview,
        AdminSection::Employees,
        AdminSection::Tasks,
        AdminSection::Schedule,
        AdminSection::Meetings,
        AdminSection::Messaging,
        AdminSection::Reports,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminSection::Overview => "overview",
            AdminSection::Employees => "employees",
            AdminSection::Tasks => "tasks",
            AdminSection::Schedule => "schedule",
            AdminSection::Meetings => "meetings",
            AdminSection::Messaging => "messaging",
            AdminSection::Reports => "reports",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sec| sec.slug() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSection {
    Overview,
    Tasks,
    Schedule,
    TimeTracking,
    Meetings,
    Messaging,
}

impl EmployeeSection {
    pub const ALL: [EmployeeSection; 6] = [
        EmployeeSection::Overview,
        EmployeeSection::Tasks,
        EmployeeSection::Schedule,
        EmployeeSection::TimeTracking,
        EmployeeSection::Meetings,
        EmployeeSection::Messaging,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            EmployeeSection::Overview => "overview",
            EmployeeSection::Tasks => "tasks",
            EmployeeSection::Schedule => "schedule",
            EmployeeSection::TimeTracking => "timetracking",
            EmployeeSection::Meetings => "meetings",
            EmployeeSection::Messaging => "messaging",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sec| sec.slug() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Admin(AdminSection),
    Employee(EmployeeSection),
}

impl Section {
    pub fn required_role(&self) -> Role {
        match self {
            Section::Admin(_) => Role::Admin,
            Section::Employee(_) => Role::Employee,
        }
    }

    pub fn home_of(role: Role) -> Self {
        match role {
            Role::Admin => Section::Admin(AdminSection::Overview),
            Role::Employee => Section::Employee(EmployeeSection::Overview),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Section(Section),
}

impl Route {
    /// Parse a console path such as `/admin/reports` or `employee/timetracking`.
    ///
    /// `/` maps to the login entry point, a bare `/admin` or `/employee`
    /// to that console's overview.
    pub fn parse(path: &str) -> AppResult<Self> {
        let trimmed = path.trim().trim_matches('/').to_lowercase();
        let mut parts = trimmed.split('/').filter(|p| !p.is_empty());

        let route = match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) | (Some("login"), None, _) => Some(Route::Login),
            (Some("admin"), None, _) => Some(Route::Section(Section::Admin(AdminSection::Overview))),
            (Some("employee"), None, _) => {
                Some(Route::Section(Section::Employee(EmployeeSection::Overview)))
            }
            (Some("admin"), Some(slug), None) => {
                AdminSection::from_slug(slug).map(|s| Route::Section(Section::Admin(s)))
            }
            (Some("employee"), Some(slug), None) => {
                EmployeeSection::from_slug(slug).map(|s| Route::Section(Section::Employee(s)))
            }
            _ => None,
        };

        route.ok_or_else(|| AppError::InvalidRoute(path.to_string()))
    }

    pub fn home_of(role: Role) -> Self {
        Route::Section(Section::home_of(role))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/login"),
            Route::Section(Section::Admin(s)) => write!(f, "/admin/{}", s.slug()),
            Route::Section(Section::Employee(s)) => write!(f, "/employee/{}", s.slug()),
        }
    }
}

/// Where the routing gate stands, derived from the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    AuthenticatedAdmin,
    AuthenticatedEmployee,
}

/// Result of a navigation attempt through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allowed(Route),
    Redirected { requested: Route, to: Route },
}

impl Navigation {
    pub fn destination(&self) -> Route {
        match self {
            Navigation::Allowed(r) => *r,
            Navigation::Redirected { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}
