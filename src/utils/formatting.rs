//! Formatting utilities used for CLI and export outputs.

/// `27900` → `07h 45m`
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.abs();
    format!("{}{:02}h {:02}m", sign, abs / 3600, (abs % 3600) / 60)
}

/// `27900` → `07:45:00`, the live counter format.
pub fn secs2clock(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let abs = secs.abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        abs / 3600,
        (abs % 3600) / 60,
        abs % 60
    )
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
