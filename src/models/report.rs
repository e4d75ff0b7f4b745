use super::tracker::BreakInterval;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// Finalized summary of one tracked day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTimeReport {
    pub employee_id: String,
    pub date: NaiveDate,
    pub day_start: DateTime<Local>,
    pub day_end: DateTime<Local>,
    pub break_intervals: Vec<BreakInterval>,
    pub total_work_seconds: i64,
    pub total_break_seconds: i64,
}

impl DailyTimeReport {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn span_seconds(&self) -> i64 {
        (self.day_end - self.day_start).num_seconds()
    }
}
