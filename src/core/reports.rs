//! Filed report queries and aggregate statistics.

use crate::db::identities::find_by_email;
use crate::db::reports::load_reports;
use crate::errors::{AppError, AppResult};
use crate::models::report::DailyTimeReport;
use crate::models::role::Role;
use crate::models::session::Session;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::{BTreeMap, BTreeSet};

/// Totals over a set of reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportStats {
    pub days: usize,
    pub employees: usize,
    pub total_work_seconds: i64,
    pub total_break_seconds: i64,
    pub avg_work_seconds: i64,
    /// Worked time against `days * target`, uncapped.
    pub performance_percent: f64,
}

impl ReportStats {
    pub fn compute(reports: &[DailyTimeReport], target_seconds: i64) -> Self {
        let days = reports.len();
        let employees = reports
            .iter()
            .map(|r| r.employee_id.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let total_work_seconds: i64 = reports.iter().map(|r| r.total_work_seconds).sum();
        let total_break_seconds: i64 = reports.iter().map(|r| r.total_break_seconds).sum();

        let avg_work_seconds = if days == 0 {
            0
        } else {
            total_work_seconds / days as i64
        };

        let expected = days as i64 * target_seconds;
        let performance_percent = if expected <= 0 {
            0.0
        } else {
            total_work_seconds as f64 / expected as f64 * 100.0
        };

        Self {
            days,
            employees,
            total_work_seconds,
            total_break_seconds,
            avg_work_seconds,
            performance_percent,
        }
    }
}

/// Per-employee totals, ordered by employee id.
pub fn summarize_by_employee(
    reports: &[DailyTimeReport],
    target_seconds: i64,
) -> Vec<(String, ReportStats)> {
    let mut grouped: BTreeMap<&str, Vec<DailyTimeReport>> = BTreeMap::new();
    for r in reports {
        grouped
            .entry(r.employee_id.as_str())
            .or_default()
            .push(r.clone());
    }

    grouped
        .into_iter()
        .map(|(id, rs)| (id.to_string(), ReportStats::compute(&rs, target_seconds)))
        .collect()
}

pub struct ReportLogic;

impl ReportLogic {
    /// Reports the session may read.
    ///
    /// Admins see every employee, or the one named by `employee_email`.
    /// Employees only ever see their own; naming someone else is refused.
    pub fn visible(
        conn: &Connection,
        session: &Session,
        employee_email: Option<&str>,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<DailyTimeReport>> {
        let own = &session.identity;

        let employee_id = match (session.role(), employee_email) {
            (Role::Admin, None) => None,
            (Role::Admin, Some(email)) => Some(
                find_by_email(conn, email)?
                    .ok_or_else(|| AppError::IdentityNotFound(email.to_string()))?
                    .identity
                    .id,
            ),
            (Role::Employee, Some(email)) if email != own.email => {
                return Err(AppError::Forbidden(
                    "employees can only read their own reports".into(),
                ));
            }
            (Role::Employee, _) => Some(own.id.clone()),
        };

        load_reports(conn, employee_id.as_deref(), bounds)
    }
}
