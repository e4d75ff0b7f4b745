use chrono::Local;
use planningpro::core::auth::{auth_state, authorize, navigate, require_role};
use planningpro::models::identity::Identity;
use planningpro::models::role::{AccountStatus, Role};
use planningpro::models::route::{
    AdminSection, AuthState, EmployeeSection, Navigation, Route, Section,
};
use planningpro::models::session::Session;

fn session(role: Role) -> Session {
    Session::new(
        Identity {
            id: "9".into(),
            email: "someone@planningpro.com".into(),
            given_name: "Some".into(),
            family_name: "One".into(),
            role,
            status: AccountStatus::Active,
        },
        Local::now(),
    )
}

fn all_sections() -> Vec<Section> {
    AdminSection::ALL
        .into_iter()
        .map(Section::Admin)
        .chain(EmployeeSection::ALL.into_iter().map(Section::Employee))
        .collect()
}

#[test]
fn authorize_needs_a_session_and_the_role() {
    let admin = session(Role::Admin);
    assert!(!authorize(None, None));
    assert!(!authorize(None, Some(Role::Admin)));
    assert!(authorize(Some(&admin), None));
    assert!(authorize(Some(&admin), Some(Role::Admin)));
    assert!(!authorize(Some(&admin), Some(Role::Employee)));
}

#[test]
fn every_section_is_gated_by_its_role() {
    for role in [Role::Admin, Role::Employee] {
        let s = session(role);
        assert_eq!(
            auth_state(Some(&s)),
            if role == Role::Admin {
                AuthState::AuthenticatedAdmin
            } else {
                AuthState::AuthenticatedEmployee
            }
        );

        for section in all_sections() {
            let route = Route::Section(section);
            let nav = navigate(Some(&s), route);
            if section.required_role() == role {
                assert_eq!(nav, Navigation::Allowed(route));
                assert!(require_role(Some(&s), section).is_ok());
            } else {
                assert_eq!(nav.destination(), Route::home_of(role));
                assert!(require_role(Some(&s), section).is_err());
            }
        }
    }

    for section in all_sections() {
        assert_eq!(
            navigate(None, Route::Section(section)).destination(),
            Route::Login
        );
    }
}

#[test]
fn routes_parse_and_print() {
    for section in all_sections() {
        let route = Route::Section(section);
        assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
    }

    assert_eq!(Route::parse("/").unwrap(), Route::Login);
    assert_eq!(Route::parse("login").unwrap(), Route::Login);
    assert_eq!(
        Route::parse("/admin").unwrap().to_string(),
        "/admin/overview"
    );
    assert_eq!(
        Route::parse("employee/TimeTracking/").unwrap().to_string(),
        "/employee/timetracking"
    );
    assert!(Route::parse("/admin/timetracking").is_err());
    assert!(Route::parse("/employee/reports").is_err());
    assert!(Route::parse("/admin/reports/2025").is_err());
}
