use crate::models::restriction::{Restriction, RestrictionStatus};
use crate::models::term::Term;
use chrono::NaiveDate;

/// Check the weekly hours against the cap.
///
/// Any term containing `now` waives the cap entirely (full progress bar).
/// Outside terms the ratio is clamped to 1.0. A non-positive cap reports a
/// full bar as soon as any hour has been worked.
pub fn evaluate(weekly_hours: f64, cap: f64, terms: &[Term], now: NaiveDate) -> Restriction {
    if terms.iter().any(|t| t.contains(now)) {
        return Restriction {
            status: RestrictionStatus::Unrestricted,
            ratio: 1.0,
        };
    }

    let ratio = if cap > 0.0 {
        (weekly_hours / cap).clamp(0.0, 1.0)
    } else if weekly_hours > 0.0 {
        1.0
    } else {
        0.0
    };

    let status = if weekly_hours <= cap {
        RestrictionStatus::Ok
    } else {
        RestrictionStatus::Exceeded
    };

    Restriction { status, ratio }
}
