//! Time utilities: parsing instants, formatting clock times.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

/// Parse `YYYY-MM-DD HH:MM[:SS]` (or with a `T` separator) as local time.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Local>> {
    let normalized = s.trim().replacen('T', " ", 1);
    let naive = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{s} does not exist in the local timezone")))
}

/// Wall clock, unless an override was given on the command line.
pub fn now_or(at: Option<&str>) -> AppResult<DateTime<Local>> {
    match at {
        Some(s) => parse_instant(s),
        None => Ok(Local::now()),
    }
}

pub fn hhmm(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}
