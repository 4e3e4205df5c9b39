use chrono::{DateTime, Local};

/// Format the time between two instants as `HH:MM:SS`.
///
/// Unfinished sessions show as `in progress`; a negative span (clock moved
/// backwards) is shown as zero.
pub fn format_elapsed(start: DateTime<Local>, end: Option<DateTime<Local>>) -> String {
    let Some(end) = end else {
        return "in progress".to_string();
    };

    let total = (end - start).num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
