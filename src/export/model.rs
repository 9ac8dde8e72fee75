// src/export/model.rs

use crate::models::entry::Entry;
use crate::utils::formatting::{format_number, yes_no};
use serde::Serialize;

/// CSV header, in column order.
pub const CSV_HEADERS: [&str; 6] = ["Date", "Start", "End", "Hours", "Earnings", "Paid"];

/// One CSV line: `Date,Start,End,Hours,Earnings,Paid`.
///
/// Every field is pre-formatted so numbers come out as `5` / `50.00`
/// rather than serde's `5.0`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CsvRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Earnings")]
    pub earnings: String,
    #[serde(rename = "Paid")]
    pub paid: String,
}

impl CsvRow {
    pub fn from_entry(e: &Entry, rate: f64) -> Self {
        Self {
            date: e.date_str(),
            start: e.start_str(),
            end: e.end_str(),
            hours: format_number(e.hours),
            earnings: format!("{:.2}", e.earnings(rate)),
            paid: yes_no(e.paid).to_string(),
        }
    }
}

/// Full record for JSON export, pay cut included.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct JsonEntry {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub earnings: f64,
    pub paid: bool,
    pub pay_cut: f64,
}

impl JsonEntry {
    pub fn from_entry(e: &Entry, rate: f64) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            start: e.start_str(),
            end: e.end_str(),
            hours: e.hours,
            earnings: (e.earnings(rate) * 100.0).round() / 100.0,
            paid: e.paid,
            pay_cut: e.pay_cut,
        }
    }
}
