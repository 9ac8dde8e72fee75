//! Time utilities: parsing HH:MM, shift durations, placeholder handling.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TIME_PLACEHOLDER;
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// CLI input: absent, empty or `-` means "unspecified"; anything else must
/// be a valid HH:MM.
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input.map(|s| s.trim()) {
        None | Some("") | Some(TIME_PLACEHOLDER) => Ok(None),
        Some(s) => parse_time(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

/// Fractional hours from `start` to `end` on the same day (negative when
/// `end` is earlier).
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_minutes() as f64 / 60.0
}
