use crate::core::calendar::{self, DateWindow};
use crate::models::entry::Entry;
use crate::models::figures::{Bucket, Figures};
use chrono::NaiveDate;

/// Compute every dashboard figure from scratch.
///
/// - week/month buckets are relative to `now`
/// - an entry inside `pay_cut` always lands in `pending_pay_cut`, whatever its
///   `paid` flag; outside it, only unpaid entries count toward `total`
/// - `pending_pay_cut` is folded into `total` once all entries are processed
pub fn aggregate(
    entries: &[Entry],
    rate: f64,
    now: NaiveDate,
    pay_cut: Option<DateWindow>,
) -> Figures {
    let this_week = DateWindow::week_of(now);
    let previous_week = DateWindow::previous_week_of(now);
    let (prev_year, prev_month) = calendar::previous_month(now);

    let mut figures = Figures::default();
    let mut owed = Bucket::default();
    let mut pending = Bucket::default();

    for entry in entries {
        let hours = entry.billable_hours();
        let earnings = hours * rate;
        let day = entry.date;

        if this_week.contains(day) {
            figures.this_week.add(hours, earnings);
        }
        if previous_week.contains(day) {
            figures.previous_week.add(hours, earnings);
        }
        if calendar::is_same_month(day, now) {
            figures.this_month.add(hours, earnings);
        }
        if calendar::is_in_month(day, prev_year, prev_month) {
            figures.previous_month.add(hours, earnings);
        }

        match pay_cut {
            Some(window) if window.contains(day) => pending.add(hours, earnings),
            _ if !entry.paid => owed.add(hours, earnings),
            _ => {}
        }
    }

    owed.absorb(pending);
    figures.total = owed;
    figures.pending_pay_cut = pending;
    figures
}
