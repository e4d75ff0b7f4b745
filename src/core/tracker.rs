//! Daily work/break/stop state machine.
//!
//! Transitions are the only place where accumulators change. The live view
//! used by `clock status` goes through [`DailyTimeState::live_totals`], which
//! borrows the state immutably.

use crate::errors::{AppError, AppResult};
use crate::models::report::DailyTimeReport;
use crate::models::tracker::{BreakInterval, DailyTimeState, Phase, Transition};
use chrono::{DateTime, Local, SubsecRound};

/// Whole seconds elapsed between `start` and `now`, never negative.
pub fn elapsed_since(start: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - start).num_seconds().max(0)
}

/// Snapshot of the running totals at a given instant, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveTotals {
    pub work_seconds: i64,
    pub break_seconds: i64,
    pub current_segment_seconds: i64,
}

impl LiveTotals {
    /// Share of `target_seconds` already worked, capped at 100.
    pub fn progress_percent(&self, target_seconds: i64) -> f64 {
        if target_seconds <= 0 {
            return 100.0;
        }
        (self.work_seconds as f64 / target_seconds as f64 * 100.0).min(100.0)
    }
}

impl DailyTimeState {
    pub fn start_day(&mut self, now: DateTime<Local>) -> AppResult<()> {
        let now = now.trunc_subsecs(0);
        match self.phase {
            Phase::Stopped => {
                self.day_start.get_or_insert(now);
                self.phase = Phase::Working { since: now };
                Ok(())
            }
            _ => Err(self.invalid(Transition::StartDay)),
        }
    }

    pub fn start_break(&mut self, now: DateTime<Local>) -> AppResult<()> {
        let now = now.trunc_subsecs(0);
        match self.phase {
            Phase::Working { since } => {
                self.accumulated_work_seconds += elapsed_since(since, now);
                self.phase = Phase::OnBreak { since: now };
                Ok(())
            }
            _ => Err(self.invalid(Transition::StartBreak)),
        }
    }

    pub fn end_break(&mut self, now: DateTime<Local>) -> AppResult<BreakInterval> {
        let now = now.trunc_subsecs(0);
        match self.phase {
            Phase::OnBreak { since } => Ok(self.close_break(since, now)),
            _ => Err(self.invalid(Transition::EndBreak)),
        }
    }

    /// Close the day and hand back its report. An open break is closed first.
    ///
    /// On success the state is reset to a fresh `Stopped` tracker for the
    /// same employee.
    pub fn end_day(&mut self, now: DateTime<Local>) -> AppResult<DailyTimeReport> {
        let now = now.trunc_subsecs(0);
        let mut next = self.clone();

        if let Phase::OnBreak { since } = next.phase {
            next.close_break(since, now);
        }

        let Phase::Working { since } = next.phase else {
            return Err(self.invalid(Transition::EndDay));
        };
        next.accumulated_work_seconds += elapsed_since(since, now);

        let day_start = next
            .day_start
            .ok_or_else(|| AppError::Other("running tracker has no day start".into()))?;

        let report = DailyTimeReport {
            employee_id: next.employee_id.clone(),
            date: day_start.date_naive(),
            day_start,
            day_end: now.max(day_start),
            break_intervals: next.break_intervals,
            total_work_seconds: next.accumulated_work_seconds,
            total_break_seconds: next.accumulated_break_seconds,
        };

        *self = DailyTimeState::new(report.employee_id.clone());
        Ok(report)
    }

    /// Apply a transition by name; `EndDay` yields the report.
    pub fn apply(
        &mut self,
        action: Transition,
        now: DateTime<Local>,
    ) -> AppResult<Option<DailyTimeReport>> {
        match action {
            Transition::StartDay => self.start_day(now).map(|_| None),
            Transition::StartBreak => self.start_break(now).map(|_| None),
            Transition::EndBreak => self.end_break(now).map(|_| None),
            Transition::EndDay => self.end_day(now).map(Some),
        }
    }

    /// Actions that are valid from the current phase.
    pub fn available_actions(&self) -> &'static [Transition] {
        match self.phase {
            Phase::Stopped => &[Transition::StartDay],
            Phase::Working { .. } => &[Transition::StartBreak, Transition::EndDay],
            Phase::OnBreak { .. } => &[Transition::EndBreak, Transition::EndDay],
        }
    }

    pub fn live_totals(&self, now: DateTime<Local>) -> LiveTotals {
        let (open_work, open_break) = match self.phase {
            Phase::Stopped => (0, 0),
            Phase::Working { since } => (elapsed_since(since, now), 0),
            Phase::OnBreak { since } => (0, elapsed_since(since, now)),
        };

        LiveTotals {
            work_seconds: self.accumulated_work_seconds + open_work,
            break_seconds: self.accumulated_break_seconds + open_break,
            current_segment_seconds: open_work + open_break,
        }
    }

    fn close_break(&mut self, since: DateTime<Local>, now: DateTime<Local>) -> BreakInterval {
        let duration = elapsed_since(since, now);
        let interval = BreakInterval {
            start: since,
            end: now.max(since),
            duration_seconds: duration,
        };
        self.accumulated_break_seconds += duration;
        self.break_intervals.push(interval);
        self.phase = Phase::Working { since: now };
        interval
    }

    fn invalid(&self, action: Transition) -> AppError {
        AppError::InvalidTransition {
            from: self.status(),
            action,
        }
    }
}
