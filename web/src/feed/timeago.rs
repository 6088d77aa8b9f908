//! Relative time labels
//!
//! Same wording and thresholds as jquery-timeago, so server-rendered and
//! appended items read alike.

use chrono::{DateTime, Utc};

/// Humanize `at` relative to `now`, e.g. "about 3 hours ago"
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = now.signed_duration_since(at).num_milliseconds();
    let (distance, suffix) = if millis < 0 {
        (-millis, "from now")
    } else {
        (millis, "ago")
    };

    let seconds = distance as f64 / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let years = days / 365.0;

    let words = if seconds < 45.0 {
        "less than a minute".to_string()
    } else if seconds < 90.0 {
        "about a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes.round() as i64)
    } else if minutes < 90.0 {
        "about an hour".to_string()
    } else if hours < 24.0 {
        format!("about {} hours", hours.round() as i64)
    } else if hours < 42.0 {
        "a day".to_string()
    } else if days < 30.0 {
        format!("{} days", days.round() as i64)
    } else if days < 45.0 {
        "about a month".to_string()
    } else if days < 365.0 {
        format!("{} months", (days / 30.0).round() as i64)
    } else if years < 1.5 {
        "about a year".to_string()
    } else {
        format!("{} years", years.round() as i64)
    };

    format!("{} {}", words, suffix)
}
