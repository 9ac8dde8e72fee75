use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Strict variant for user input.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s.trim()).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// Bounds of a single period token: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = p.split_once('-')?;
            month_bounds(y.parse().ok()?, m.parse().ok()?)
        }
        10 => parse_date(p).map(|d| (d, d)),
        _ => None,
    }
}

/// Parse a `--period` / `--range` expression into inclusive bounds.
///
/// Supported:
/// - `all` (→ `None`, no filtering)
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `A:B` where A and B are any of the above (mixed granularity allowed)
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let invalid = || AppError::InvalidDate(format!("invalid period '{p}'"));

    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = period_bounds(start.trim()).ok_or_else(invalid)?;
        let (_, to) = period_bounds(end.trim()).ok_or_else(invalid)?;
        if from > to {
            return Err(invalid());
        }
        return Ok(Some((from, to)));
    }

    period_bounds(p).map(Some).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_period("all").unwrap(), None);
        assert_eq!(parse_period("2025").unwrap(), Some((d(2025, 1, 1), d(2025, 12, 31))));
        assert_eq!(parse_period("2024-02").unwrap(), Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(parse_period("2025-12").unwrap(), Some((d(2025, 12, 1), d(2025, 12, 31))));
        assert_eq!(parse_period("2025-08-09").unwrap(), Some((d(2025, 8, 9), d(2025, 8, 9))));
    }

    #[test]
    fn ranges() {
        assert_eq!(
            parse_period("2024-09:2025-09").unwrap(),
            Some((d(2024, 9, 1), d(2025, 9, 30)))
        );
        assert_eq!(
            parse_period("2025-08-04:2025-08-10").unwrap(),
            Some((d(2025, 8, 4), d(2025, 8, 10)))
        );
    }

    #[test]
    fn invalid_periods() {
        for p in ["", "25", "2025-13", "2025-02-30", "2025-09:2025-01", "abcd"] {
            assert!(parse_period(p).is_err(), "{p} should be rejected");
        }
    }

    #[test]
    fn require_date_rejects_garbage() {
        assert!(matches!(require_date("10/08/2025"), Err(AppError::InvalidDate(_))));
        assert_eq!(require_date(" 2025-08-10 ").unwrap(), d(2025, 8, 10));
    }
}
