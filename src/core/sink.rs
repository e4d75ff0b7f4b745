use crate::errors::AppResult;
use crate::models::report::DailyTimeReport;

/// Append-only destination for finalized days.
///
/// Contract: accept and durably store at most one report per employee and
/// date; a second one is refused with `AppError::DuplicateReport`.
pub trait ReportSink {
    fn append(&self, report: &DailyTimeReport) -> AppResult<()>;
}
