use chrono::{DateTime, Local, Utc};

/// `HH:MM:SS` in local time
pub fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// `YYYY-MM-DD HH:MM:SS` in local time
pub fn format_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// `YYYY/MM/DD HH:MM` in UTC
pub fn format_slash(at: DateTime<Utc>) -> String {
    at.format("%Y/%m/%d %H:%M").to_string()
}

/// UTC span, collapsing the date when both ends share it
pub fn format_period(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    if start.date_naive() == end.date_naive() {
        format!("{}~{}", format_slash(start), end.format("%H:%M"))
    } else {
        format!("{}~{}", format_slash(start), format_slash(end))
    }
}

/// `YYYY-MM-DD`, or `YYYY-MM-DD ~ YYYY-MM-DD` across days (UTC)
pub fn format_date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let (start, end) = (start.date_naive(), end.date_naive());
    if start == end {
        start.to_string()
    } else {
        format!("{} ~ {}", start, end)
    }
}
