//! Calendar window helpers: week/month membership and the pay-cut window.
//!
//! Everything works on `NaiveDate` (local wall-clock days), so there is no
//! time-of-day to normalise.

use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive `[start, end]` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// `[last Friday on/before anchor, anchor]`.
    pub fn pay_cut(anchor: NaiveDate) -> Self {
        Self::new(last_friday_before(anchor), anchor)
    }

    /// The Monday-based week containing `day`.
    pub fn week_of(day: NaiveDate) -> Self {
        let start = start_of_week(day);
        Self::new(start, start + Duration::days(6))
    }

    /// The 7 days immediately before the week containing `day`.
    pub fn previous_week_of(day: NaiveDate) -> Self {
        let this_start = start_of_week(day);
        Self::new(
            this_start - Duration::days(7),
            this_start - Duration::days(1),
        )
    }
}

/// Monday of the week containing `day`. Sunday belongs to the week that
/// started six days earlier.
pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    let weekday = day.weekday().num_days_from_sunday() as i64;
    let offset = if weekday == 0 { -6 } else { 1 - weekday };
    day + Duration::days(offset)
}

pub fn is_same_week(day: NaiveDate, reference: NaiveDate) -> bool {
    DateWindow::week_of(reference).contains(day)
}

pub fn is_same_month(day: NaiveDate, reference: NaiveDate) -> bool {
    day.year() == reference.year() && day.month() == reference.month()
}

/// `(year, month)` of the calendar month before the one containing `day`.
pub fn previous_month(day: NaiveDate) -> (i32, u32) {
    if day.month() == 1 {
        (day.year() - 1, 12)
    } else {
        (day.year(), day.month() - 1)
    }
}

pub fn is_in_month(day: NaiveDate, year: i32, month: u32) -> bool {
    day.year() == year && day.month() == month
}

/// Most recent Friday on or before `anchor`.
///
/// Friday and Saturday step back `weekday - 5` days; every other day wraps
/// to the previous week's Friday (`7 - (5 - weekday)` days back).
pub fn last_friday_before(anchor: NaiveDate) -> NaiveDate {
    let weekday = anchor.weekday().num_days_from_sunday() as i64;
    let diff = if weekday >= 5 {
        weekday - 5
    } else {
        7 - (5 - weekday)
    };
    anchor - Duration::days(diff)
}
