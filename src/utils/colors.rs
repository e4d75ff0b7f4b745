/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::tracker::WorkStatus;

/// Working → green, on break → yellow, stopped → grey.
pub fn color_for_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Working => GREEN,
        WorkStatus::OnBreak => YELLOW,
        WorkStatus::Stopped => GREY,
    }
}

/// Performance against target:
/// \>=100 → green
/// \>=80 → yellow
/// below → red
pub fn color_for_performance(percent: f64) -> &'static str {
    if percent >= 100.0 {
        GREEN
    } else if percent >= 80.0 {
        YELLOW
    } else {
        RED
    }
}
