use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Placeholder for values the server did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Locale used for every date shown on the dashboard.
pub const DISPLAY_LOCALE: Locale = Locale::fr_FR;

const LONG_TIMESTAMP_FORMAT: &str = "%-d %B %Y à %H:%M";
const SHORT_TIMESTAMP_FORMAT: &str = "%-d %b %Y, %H:%M";
const SHORT_DATE_FORMAT: &str = "%-d %b";

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part` as a percentage of `total`. Zero, negative or non-finite totals give 0.
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() || !part.is_finite() {
        return 0.0;
    }
    part / total * 100.0
}

/// Whole minutes in a number of seconds (floor division).
pub fn whole_minutes(seconds: f64) -> u64 {
    if seconds <= 0.0 || !seconds.is_finite() {
        return 0;
    }
    (seconds / 60.0).floor() as u64
}

/// Format seconds as `"{m}m {s}s"`, used for distribution summaries.
pub fn format_minutes_seconds(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!("{}m {}s", total / 60, total % 60)
}

/// Format a completion time using the largest applicable unit breakdown.
///
/// Examples: `45s`, `2m 5s`, `1h 2m 5s`. Absent or zero durations give `N/A`.
pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite() && *s > 0.0) else {
        return NOT_AVAILABLE.to_string();
    };

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Medal marker for podium ranks.
pub fn medal(rank: u32) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

pub fn check_mark(value: bool) -> &'static str {
    if value { "✓" } else { "✗" }
}

/// Group digits by thousands the way the French locale does (narrow no-break space).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339, naive ISO 8601 date-times (with or without fractional
/// seconds) and plain `YYYY-MM-DD` dates. The wall-clock time is kept as sent;
/// no timezone conversion happens.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn format_localized(value: &str, format: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt
            .and_utc()
            .format_localized(format, DISPLAY_LOCALE)
            .to_string(),
        None => value.to_string(),
    }
}

/// Long form, e.g. `15 mars 2025 à 14:30`. Unparseable values are returned as is.
pub fn format_long_timestamp(value: Option<&str>) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |v| format_localized(v, LONG_TIMESTAMP_FORMAT),
    )
}

/// Leaderboard form, e.g. `15 mars 2025, 14:30`.
pub fn format_short_timestamp(value: Option<&str>) -> String {
    value.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |v| format_localized(v, SHORT_TIMESTAMP_FORMAT),
    )
}

/// Axis label for a day, e.g. `15 mars`.
pub fn format_short_date(value: &str) -> String {
    format_localized(value, SHORT_DATE_FORMAT)
}

/// Timestamp used in generated report footers.
pub fn format_generated_at(now: DateTime<Utc>) -> String {
    now.format_localized(LONG_TIMESTAMP_FORMAT, DISPLAY_LOCALE)
        .to_string()
}
