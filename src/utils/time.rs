//! Time utilities: timestamp and duration formatting for tables and exports.

use chrono::{DateTime, Local};

pub fn format_date_time(dt: &DateTime<Local>) -> String {
    dt.format("%d %b %Y %H:%M:%S").to_string()
}

/// Trip duration in whole hours, minutes and seconds. Zero-valued leading
/// units are omitted; a zero-length trip still renders its seconds
/// ("0 dtk").
pub fn format_duration(start: DateTime<Local>, end: DateTime<Local>) -> String {
    let total_secs = (end - start).num_seconds();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} jam", hours));
    }
    if minutes > 0 {
        parts.push(format!("{} mnt", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{} dtk", seconds));
    }
    parts.join(" ")
}
