use crate::models::identity::Identity;
use crate::models::report::DailyTimeReport;
use crate::utils::formatting::secs2clock;
use crate::utils::time::hhmm;
use serde::Serialize;

/// Flat row for CSV / JSON export, one per filed report.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportExport {
    pub employee_id: String,
    pub email: String,
    pub name: String,
    pub date: String,
    pub day_start: String,
    pub day_end: String,
    pub worked: String,
    pub on_break: String,
    pub total_work_seconds: i64,
    pub total_break_seconds: i64,
    pub break_count: usize,
    /// `HH:MM-HH:MM` intervals joined with `; `
    pub breaks: String,
}

impl ReportExport {
    /// `who` is `None` when the account was removed after filing.
    pub fn from_report(r: &DailyTimeReport, who: Option<&Identity>) -> Self {
        let breaks = r
            .break_intervals
            .iter()
            .map(|b| format!("{}-{}", hhmm(&b.start), hhmm(&b.end)))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            employee_id: r.employee_id.clone(),
            email: who.map(|i| i.email.clone()).unwrap_or_default(),
            name: who.map(Identity::display_name).unwrap_or_default(),
            date: r.date_str(),
            day_start: r.day_start.format("%H:%M:%S").to_string(),
            day_end: r.day_end.format("%H:%M:%S").to_string(),
            worked: secs2clock(r.total_work_seconds),
            on_break: secs2clock(r.total_break_seconds),
            total_work_seconds: r.total_work_seconds,
            total_break_seconds: r.total_break_seconds,
            break_count: r.break_intervals.len(),
            breaks,
        }
    }
}
