//! Clock commands on top of the per-employee tracker.

use crate::core::sink::ReportSink;
use crate::core::tracker::LiveTotals;
use crate::db::log::ttlog_quiet;
use crate::db::reports::has_report;
use crate::db::time_state::{clear_state, load_state, save_state};
use crate::errors::{AppError, AppResult};
use crate::models::report::DailyTimeReport;
use crate::models::session::Session;
use crate::models::tracker::{DailyTimeState, Transition, WorkStatus};
use chrono::{DateTime, Local};
use rusqlite::Connection;

/// Result of one successful transition.
#[derive(Debug)]
pub struct ClockOutcome {
    pub state: DailyTimeState,
    /// Set only when the day was closed.
    pub report: Option<DailyTimeReport>,
}

/// What `clock status` shows.
#[derive(Debug)]
pub struct ClockSnapshot {
    pub state: DailyTimeState,
    pub totals: LiveTotals,
    pub at: DateTime<Local>,
}

impl ClockSnapshot {
    /// The tracker was started on an earlier calendar day and is still open.
    pub fn is_stale(&self) -> bool {
        self.state.status() != WorkStatus::Stopped
            && self
                .state
                .day_start()
                .is_some_and(|d| d.date_naive() < self.at.date_naive())
    }
}

fn operation_name(action: Transition) -> &'static str {
    match action {
        Transition::StartDay => "clock_start",
        Transition::StartBreak => "clock_break",
        Transition::EndBreak => "clock_resume",
        Transition::EndDay => "clock_end",
    }
}

pub struct ClockLogic;

impl ClockLogic {
    /// Saved tracker for `employee_id`, or a fresh stopped one.
    pub fn current(conn: &Connection, employee_id: &str) -> AppResult<DailyTimeState> {
        Ok(load_state(conn, employee_id)?.unwrap_or_else(|| DailyTimeState::new(employee_id)))
    }

    pub fn snapshot(
        conn: &Connection,
        session: &Session,
        now: DateTime<Local>,
    ) -> AppResult<ClockSnapshot> {
        let state = Self::current(conn, &session.identity.id)?;
        let totals = state.live_totals(now);
        Ok(ClockSnapshot {
            state,
            totals,
            at: now,
        })
    }

    /// Apply `action` for the session's employee and persist the outcome.
    ///
    /// Closing the day hands the report to `sink` and resets the tracker row
    /// inside one transaction: either both land or neither does, so a refused
    /// report or a failed reset leaves the day open.
    pub fn apply<K: ReportSink>(
        conn: &Connection,
        sink: &K,
        session: &Session,
        action: Transition,
        now: DateTime<Local>,
    ) -> AppResult<ClockOutcome> {
        let employee_id = session.identity.id.as_str();
        let mut state = Self::current(conn, employee_id)?;

        if action == Transition::StartDay
            && state.status() == WorkStatus::Stopped
            && state.day_start().is_none()
        {
            let date = now.date_naive();
            if has_report(conn, employee_id, &date)? {
                return Err(AppError::DayAlreadyReported(
                    date.format("%Y-%m-%d").to_string(),
                ));
            }
        }

        let report = state.apply(action, now)?;

        let tx = conn.unchecked_transaction()?;
        match &report {
            Some(r) => {
                sink.append(r)?;
                clear_state(&tx, employee_id)?;
            }
            None => save_state(&tx, &state)?,
        }
        tx.commit()?;

        let message = match &report {
            Some(r) => format!(
                "Day {} closed: {}s worked, {}s on break",
                r.date_str(),
                r.total_work_seconds,
                r.total_break_seconds
            ),
            None => format!("Now {}", state.status()),
        };
        ttlog_quiet(conn, operation_name(action), &session.identity.email, &message);

        Ok(ClockOutcome { state, report })
    }
}
