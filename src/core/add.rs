use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{count_entries, insert_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::time::{hours_between, parse_time};
use chrono::{NaiveDate, NaiveTime};

/// Validated input of the `add` command.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub hours: Option<f64>,
    pub pay_cut: Option<f64>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Turn a request into an unpaid entry.
    ///
    /// Hours given as 0 (or not given) are derived from start/end when both
    /// are present. The final value must be a positive number.
    pub fn build_entry(req: &AddRequest) -> AppResult<Entry> {
        let date = req
            .date
            .ok_or_else(|| AppError::InvalidDate("a date is required".into()))?;

        let mut hours = req.hours.unwrap_or(0.0);
        if (hours == 0.0 || hours.is_nan())
            && let (Some(s), Some(e)) = (req.start, req.end)
        {
            hours = hours_between(s, e);
        }

        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidHours(format!(
                "{hours} (give --hours or an --in/--out pair that ends after it starts)"
            )));
        }

        let pay_cut = req.pay_cut.unwrap_or(0.0);
        if !pay_cut.is_finite() || pay_cut < 0.0 {
            return Err(AppError::InvalidPayCut(pay_cut.to_string()));
        }

        Ok(Entry::new(date, hours)
            .with_times(req.start, req.end)
            .with_pay_cut(pay_cut))
    }

    pub fn apply(pool: &mut DbPool, req: &AddRequest) -> AppResult<Entry> {
        let mut entry = Self::build_entry(req)?;
        entry.id = insert_entry(&pool.conn, &entry)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &entry.date_str(),
            &format!(
                "Added entry #{} ({} → {}, {} h, pay cut {})",
                entry.id,
                entry.start_str(),
                entry.end_str(),
                entry.hours,
                entry.pay_cut
            ),
        );

        Ok(entry)
    }

    /// Insert the sample shifts, only into an empty table. Returns how many
    /// were added.
    pub fn seed_demo(pool: &mut DbPool) -> AppResult<usize> {
        if count_entries(&pool.conn)? > 0 {
            return Ok(0);
        }

        let samples = [
            ("2025-08-09", "01:30", "05:00", 3.5),
            ("2025-08-09", "06:00", "11:00", 5.0),
            ("2025-08-10", "-", "-", 9.5),
            ("2025-08-16", "01:00", "06:00", 5.0),
        ];

        for (date, start, end, hours) in samples {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| AppError::Other(e.to_string()))?;
            let entry = Entry::new(date, hours).with_times(parse_time(start), parse_time(end));
            insert_entry(&pool.conn, &entry)?;
        }

        ttlog_quiet(&pool.conn, "init", "demo", "Inserted sample entries");
        Ok(samples.len())
    }
}
