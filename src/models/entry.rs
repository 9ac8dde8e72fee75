use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Placeholder shown (and accepted) for an unspecified start/end time.
pub const TIME_PLACEHOLDER: &str = "-";

/// One logged work session.
///
/// `hours` is the only quantity used by the aggregation engine; `start`/`end`
/// are kept for display and export once `hours` is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub hours: f64,
    pub paid: bool,
    pub pay_cut: f64,
}

impl Entry {
    /// Build a fresh, unpaid entry (id 0 until it is stored).
    pub fn new(date: NaiveDate, hours: f64) -> Self {
        Self {
            id: 0,
            date,
            start: None,
            end: None,
            hours,
            paid: false,
            pay_cut: 0.0,
        }
    }

    pub fn with_times(mut self, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn with_pay_cut(mut self, pay_cut: f64) -> Self {
        self.pay_cut = pay_cut;
        self
    }

    /// Hours as seen by the aggregates: never negative, never NaN.
    pub fn billable_hours(&self) -> f64 {
        coerce_non_negative(self.hours)
    }

    pub fn earnings(&self, rate: f64) -> f64 {
        self.billable_hours() * rate
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        time::format_optional_time(self.start)
    }

    pub fn end_str(&self) -> String {
        time::format_optional_time(self.end)
    }
}

/// Any non-finite or negative number becomes 0.
pub fn coerce_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Stringly typed entry exactly as it sits in storage.
///
/// Conversion to [`Entry`] is the single validation step between the store
/// and the engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub pay_cut: Option<f64>,
}

impl RawEntry {
    /// Validate the date and coerce everything else.
    ///
    /// - an unparseable date is an error (the row never reaches the engine)
    /// - missing/negative/non-finite `hours` and `pay_cut` become 0
    /// - empty, placeholder or unparseable times become `None`
    /// - a missing `paid` flag means unpaid
    pub fn into_entry(self) -> AppResult<Entry> {
        let d = date::parse_date(self.date.trim())
            .ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;

        Ok(Entry {
            id: self.id,
            date: d,
            start: time::parse_time(self.start.trim()),
            end: time::parse_time(self.end.trim()),
            hours: coerce_non_negative(self.hours.unwrap_or(0.0)),
            paid: self.paid.unwrap_or(false),
            pay_cut: coerce_non_negative(self.pay_cut.unwrap_or(0.0)),
        })
    }
}
