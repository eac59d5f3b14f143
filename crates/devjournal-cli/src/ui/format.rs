//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};

/// Format focus hours the way they were entered (`2h`, `2.5h`).
pub fn format_hours(hours: f64) -> String {
    format!("{}h", hours)
}

/// Tags with their `#` prefix, comma separated.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a datetime for display.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}
