use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::core::session::SessionLogic;
use crate::db::identities::NewIdentity;
use crate::errors::{AppError, AppResult};
use crate::models::role::{AccountStatus, Role};
use crate::models::route::{AdminSection, Section};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let pool = open_db(cfg)?;
    let conn = &pool.conn;
    let manager = SessionLogic::manager(conn, cfg);
    let actor = manager.require(Section::Admin(AdminSection::Employees))?;

    match action {
        EmployeeAction::List { search } => {
            let entries = EmployeeLogic::list(conn, search.as_deref())?;
            if entries.is_empty() {
                info("No accounts found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 3),
                Column::new("NAME", 12),
                Column::new("EMAIL", 12),
                Column::new("ROLE", 8),
                Column::new("STATUS", 8),
                Column::new("HIRED", 10),
                Column::new("LAST LOGIN", 16),
            ])
            .separator(&cfg.separator_char);

            for e in &entries {
                let last_login = e
                    .last_login
                    .as_deref()
                    .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
                    .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "--".into());

                table.add_row(vec![
                    e.identity.id.clone(),
                    e.identity.display_name(),
                    e.identity.email.clone(),
                    e.identity.role.to_string(),
                    e.identity.status.to_string(),
                    e.hired_on.clone().unwrap_or_else(|| "--".into()),
                    last_login,
                ]);
            }

            print!("{}", table.render());
            println!("\n{} account(s)", entries.len());
        }

        EmployeeAction::Add {
            email,
            given_name,
            family_name,
            role,
            password,
            hired_on,
        } => {
            let role = Role::from_input(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

            if let Some(h) = hired_on
                && parse_date(h).is_none()
            {
                return Err(AppError::InvalidDate(h.clone()));
            }

            let identity = EmployeeLogic::add(
                conn,
                actor,
                NewIdentity {
                    email: email.clone(),
                    given_name: given_name.clone(),
                    family_name: family_name.clone(),
                    role,
                    status: AccountStatus::Active,
                    secret: password.clone(),
                    hired_on: hired_on.clone(),
                },
            )?;

            success(format!(
                "Account created: {} <{}> as {} (id {})",
                identity.display_name(),
                identity.email,
                identity.role,
                identity.id
            ));
        }

        EmployeeAction::Status { email, status } => {
            let status = AccountStatus::from_input(status)
                .ok_or_else(|| AppError::InvalidStatus(status.clone()))?;
            EmployeeLogic::set_status(conn, actor, email, status)?;
            success(format!("{email} is now {status}"));
        }

        EmployeeAction::Remove { email } => {
            let removed = EmployeeLogic::remove(conn, actor, email)?;
            success(format!(
                "Removed {} <{}>; filed reports are kept",
                removed.display_name(),
                removed.email
            ));
        }
    }

    Ok(())
}
