use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Stopped,
    Working,
    OnBreak,
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkStatus::Stopped => "stopped",
            WorkStatus::Working => "working",
            WorkStatus::OnBreak => "on break",
        })
    }
}

/// User-initiated actions of the daily tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartDay,
    StartBreak,
    EndBreak,
    EndDay,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transition::StartDay => "start the day",
            Transition::StartBreak => "start a break",
            Transition::EndBreak => "end the break",
            Transition::EndDay => "end the day",
        })
    }
}

/// Current phase, carrying the start of the open segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Stopped,
    Working {
        since: DateTime<Local>,
    },
    OnBreak {
        since: DateTime<Local>,
    },
}

impl Phase {
    pub fn status(&self) -> WorkStatus {
        match self {
            Phase::Stopped => WorkStatus::Stopped,
            Phase::Working { .. } => WorkStatus::Working,
            Phase::OnBreak { .. } => WorkStatus::OnBreak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub duration_seconds: i64,
}

/// In-progress tracker for one employee and one calendar day.
///
/// Fields are only mutated by the transitions in `core::tracker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTimeState {
    pub(crate) employee_id: String,
    pub(crate) phase: Phase,
    pub(crate) day_start: Option<DateTime<Local>>,
    pub(crate) accumulated_work_seconds: i64,
    pub(crate) accumulated_break_seconds: i64,
    pub(crate) break_intervals: Vec<BreakInterval>,
}

impl DailyTimeState {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            phase: Phase::Stopped,
            day_start: None,
            accumulated_work_seconds: 0,
            accumulated_break_seconds: 0,
            break_intervals: Vec::new(),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> WorkStatus {
        self.phase.status()
    }

    pub fn day_start(&self) -> Option<DateTime<Local>> {
        self.day_start
    }

    pub fn work_started_at(&self) -> Option<DateTime<Local>> {
        match self.phase {
            Phase::Working { since } => Some(since),
            _ => None,
        }
    }

    pub fn break_started_at(&self) -> Option<DateTime<Local>> {
        match self.phase {
            Phase::OnBreak { since } => Some(since),
            _ => None,
        }
    }

    pub fn accumulated_work_seconds(&self) -> i64 {
        self.accumulated_work_seconds
    }

    pub fn accumulated_break_seconds(&self) -> i64 {
        self.accumulated_break_seconds
    }

    pub fn break_intervals(&self) -> &[BreakInterval] {
        &self.break_intervals
    }
}
