//! `time_reports` / `report_breaks`: append-only history of finalized days.

use crate::core::sink::ReportSink;
use crate::errors::{AppError, AppResult};
use crate::models::report::DailyTimeReport;
use crate::models::tracker::BreakInterval;
use crate::ui::messages::warning;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

pub struct DbReportSink<'a> {
    conn: &'a Connection,
}

impl<'a> DbReportSink<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl ReportSink for DbReportSink<'_> {
    fn append(&self, report: &DailyTimeReport) -> AppResult<()> {
        insert_report(self.conn, report)
    }
}

fn parse_ts(s: &str) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.to_string())),
            )
        })
}

pub fn has_report(conn: &Connection, employee_id: &str, date: &NaiveDate) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM time_reports WHERE employee_id = ?1 AND date = ?2",
            params![employee_id, date.format("%Y-%m-%d").to_string()],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Insert a report and its breaks as one unit.
///
/// Runs under a savepoint, so it nests inside a caller's transaction and
/// commits with it.
pub fn insert_report(conn: &Connection, report: &DailyTimeReport) -> AppResult<()> {
    if has_report(conn, &report.employee_id, &report.date)? {
        return Err(AppError::DuplicateReport {
            employee: report.employee_id.clone(),
            date: report.date_str(),
        });
    }

    conn.execute_batch("SAVEPOINT insert_report")?;

    match write_report(conn, report) {
        Ok(()) => {
            conn.execute_batch("RELEASE insert_report")?;
            Ok(())
        }
        Err(e) => {
            if let Err(rb) = conn.execute_batch("ROLLBACK TO insert_report; RELEASE insert_report") {
                warning(format!("Rollback of report insert failed: {rb}"));
            }
            Err(e.into())
        }
    }
}

fn write_report(conn: &Connection, report: &DailyTimeReport) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO time_reports
            (employee_id, date, day_start, day_end, total_work_seconds, total_break_seconds, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            report.employee_id,
            report.date_str(),
            report.day_start.to_rfc3339(),
            report.day_end.to_rfc3339(),
            report.total_work_seconds,
            report.total_break_seconds,
            Local::now().to_rfc3339(),
        ],
    )?;
    let report_id = conn.last_insert_rowid();

    for (pos, b) in report.break_intervals.iter().enumerate() {
        conn.execute(
            "INSERT INTO report_breaks (report_id, position, start, end, duration_seconds)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                report_id,
                pos as i64,
                b.start.to_rfc3339(),
                b.end.to_rfc3339(),
                b.duration_seconds,
            ],
        )?;
    }
    Ok(())
}

fn map_report(row: &Row) -> rusqlite::Result<(i64, DailyTimeReport)> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;
    let day_start: String = row.get("day_start")?;
    let day_end: String = row.get("day_end")?;

    Ok((
        row.get("id")?,
        DailyTimeReport {
            employee_id: row.get("employee_id")?,
            date,
            day_start: parse_ts(&day_start)?,
            day_end: parse_ts(&day_end)?,
            break_intervals: Vec::new(),
            total_work_seconds: row.get("total_work_seconds")?,
            total_break_seconds: row.get("total_break_seconds")?,
        },
    ))
}

fn load_breaks(conn: &Connection, report_id: i64) -> AppResult<Vec<BreakInterval>> {
    let mut stmt = conn.prepare_cached(
        "SELECT start, end, duration_seconds FROM report_breaks
         WHERE report_id = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([report_id], |row| {
        let start: String = row.get(0)?;
        let end: String = row.get(1)?;
        Ok(BreakInterval {
            start: parse_ts(&start)?,
            end: parse_ts(&end)?,
            duration_seconds: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Reports ordered by date then employee, optionally restricted to one
/// employee and to an inclusive date range.
pub fn load_reports(
    conn: &Connection,
    employee_id: Option<&str>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DailyTimeReport>> {
    let mut sql = String::from(
        "SELECT id, employee_id, date, day_start, day_end, total_work_seconds, total_break_seconds
         FROM time_reports WHERE 1 = 1",
    );
    let mut args: Vec<Value> = Vec::new();

    if let Some(id) = employee_id {
        args.push(Value::Text(id.to_string()));
        sql.push_str(&format!(" AND employee_id = ?{}", args.len()));
    }
    if let Some((start, end)) = bounds {
        args.push(Value::Text(start.format("%Y-%m-%d").to_string()));
        sql.push_str(&format!(" AND date >= ?{}", args.len()));
        args.push(Value::Text(end.format("%Y-%m-%d").to_string()));
        sql.push_str(&format!(" AND date <= ?{}", args.len()));
    }
    sql.push_str(" ORDER BY date ASC, employee_id ASC");

    let headers: Vec<(i64, DailyTimeReport)> = {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args), map_report)?;
        let mut v = Vec::new();
        for r in rows {
            v.push(r?);
        }
        v
    };

    let mut out = Vec::with_capacity(headers.len());
    for (id, mut report) in headers {
        report.break_intervals = load_breaks(conn, id)?;
        out.push(report);
    }
    Ok(out)
}
