use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Months, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First and last day covered by a single period token.
///
/// - YYYY       → whole year
/// - YYYY-MM    → whole month
/// - YYYY-MM-DD → that day
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    match p.len() {
        10 => parse_date(p).map(|d| (d, d)),
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
            Some((first, last))
        }
        4 => {
            let year: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            ))
        }
        _ => None,
    }
}

/// Parse a `--period` / `--range` expression into inclusive date bounds.
///
/// Accepts a single token (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`), a `start:end`
/// range of two tokens, or `all` (no bounds).
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    if p.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let bounds = match p.split_once(':') {
        Some((start, end)) => {
            let (s, _) = period_bounds(start).ok_or_else(|| AppError::InvalidDate(p.into()))?;
            let (_, e) = period_bounds(end).ok_or_else(|| AppError::InvalidDate(p.into()))?;
            (s, e)
        }
        None => period_bounds(p).ok_or_else(|| AppError::InvalidDate(p.into()))?,
    };

    if bounds.0 > bounds.1 {
        return Err(AppError::InvalidDate(format!(
            "{p}: start is after end"
        )));
    }
    Ok(Some(bounds))
}

/// Monday..Sunday week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = d.weekday().num_days_from_monday() as u64;
    let monday = d - Days::new(offset);
    (monday, monday + Days::new(6))
}
