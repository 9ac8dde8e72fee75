use crate::core::calendar::DateWindow;
use chrono::NaiveDate;

/// A date range during which the weekly cap does not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Term {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { id: 0, start, end }
    }

    /// Inclusive window; a term whose start is after its end never matches.
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start, self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.window().contains(day)
    }
}
