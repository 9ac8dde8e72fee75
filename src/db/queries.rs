//! Entry repository: the only place that reads or writes the `entries` table.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, RawEntry};
use crate::ui::messages::warning;
use crate::utils::time::format_optional_time;
use chrono::{Local, NaiveDate};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_ENTRIES: &str =
    "SELECT id, date, start_time, end_time, hours, paid, pay_cut FROM entries";

/// Numbers may have been stored as text by older tools; accept both.
fn value_to_f64(v: Value) -> Option<f64> {
    match v {
        Value::Real(f) => Some(f),
        Value::Integer(i) => Some(i as f64),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_bool(v: Value) -> Option<bool> {
    match v {
        Value::Integer(i) => Some(i != 0),
        Value::Real(f) => Some(f != 0.0),
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn value_to_string(v: Value) -> String {
    match v {
        Value::Text(s) => s,
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        _ => String::new(),
    }
}

pub fn map_raw_row(row: &Row) -> rusqlite::Result<RawEntry> {
    Ok(RawEntry {
        id: row.get("id")?,
        date: value_to_string(row.get("date")?),
        start: value_to_string(row.get("start_time")?),
        end: value_to_string(row.get("end_time")?),
        hours: value_to_f64(row.get("hours")?),
        paid: value_to_bool(row.get("paid")?),
        pay_cut: value_to_f64(row.get("pay_cut")?),
    })
}

/// All stored rows, insertion order, without validation.
pub fn load_raw_entries(conn: &Connection) -> AppResult<Vec<RawEntry>> {
    let mut stmt = conn.prepare(&format!("{SELECT_ENTRIES} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_raw_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All valid entries, insertion order.
///
/// Rows whose date cannot be parsed never reach the engine: they are
/// reported with a warning and left out.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut out = Vec::new();

    for raw in load_raw_entries(conn)? {
        let id = raw.id;
        match raw.into_entry() {
            Ok(e) => out.push(e),
            Err(e) => warning(format!("Skipping entry #{id}: {e}")),
        }
    }

    Ok(out)
}

/// Valid entries whose date falls in `[from, to]`; `None` means everything.
pub fn load_entries_in_range(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Entry>> {
    let entries = load_entries(conn)?;
    Ok(match bounds {
        None => entries,
        Some((from, to)) => entries
            .into_iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect(),
    })
}

/// One stored row as-is, even when its date does not parse.
pub fn find_raw_entry(conn: &Connection, id: i64) -> AppResult<Option<RawEntry>> {
    Ok(conn
        .query_row(
            &format!("{SELECT_ENTRIES} WHERE id = ?1"),
            [id],
            map_raw_row,
        )
        .optional()?)
}

pub fn find_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    find_raw_entry(conn, id)?
        .map(RawEntry::into_entry)
        .transpose()
}

/// Append an entry, returns its new id.
pub fn insert_entry(conn: &Connection, e: &Entry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (date, start_time, end_time, hours, paid, pay_cut, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            e.date_str(),
            format_optional_time(e.start),
            format_optional_time(e.end),
            e.hours,
            e.paid,
            e.pay_cut,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn mark_paid(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("UPDATE entries SET paid = 1 WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

/// Flag every unpaid entry as paid, returns how many changed.
pub fn mark_all_paid(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("UPDATE entries SET paid = 1 WHERE paid <> 1", [])?)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn insert_and_reload_keeps_order_and_fields() {
        let pool = DbPool::in_memory().unwrap();
        let t = |s: &str| NaiveTime::parse_from_str(s, "%H:%M").ok();

        let a = Entry::new(d(2025, 8, 9), 3.5).with_times(t("01:30"), t("05:00"));
        let b = Entry::new(d(2025, 8, 10), 9.5).with_pay_cut(2.0);
        let id_a = insert_entry(&pool.conn, &a).unwrap();
        let id_b = insert_entry(&pool.conn, &b).unwrap();
        assert!(id_b > id_a);

        let all = load_entries(&pool.conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].start_str(), "01:30");
        assert_eq!(all[0].end_str(), "05:00");
        assert_eq!(all[1].start, None);
        assert_eq!(all[1].pay_cut, 2.0);
        assert!(!all[1].paid);
    }

    #[test]
    fn mark_paid_and_delete_report_missing_ids() {
        let pool = DbPool::in_memory().unwrap();
        let id = insert_entry(&pool.conn, &Entry::new(d(2025, 8, 9), 1.0)).unwrap();

        mark_paid(&pool.conn, id).unwrap();
        assert!(find_entry(&pool.conn, id).unwrap().unwrap().paid);

        assert!(matches!(mark_paid(&pool.conn, 999), Err(AppError::EntryNotFound(999))));
        delete_entry(&pool.conn, id).unwrap();
        assert!(matches!(delete_entry(&pool.conn, id), Err(AppError::EntryNotFound(_))));
        assert_eq!(count_entries(&pool.conn).unwrap(), 0);
    }

    #[test]
    fn mark_all_paid_only_counts_changes() {
        let pool = DbPool::in_memory().unwrap();
        insert_entry(&pool.conn, &Entry::new(d(2025, 8, 9), 1.0).with_paid(true)).unwrap();
        insert_entry(&pool.conn, &Entry::new(d(2025, 8, 9), 1.0)).unwrap();
        insert_entry(&pool.conn, &Entry::new(d(2025, 8, 9), 1.0)).unwrap();

        assert_eq!(mark_all_paid(&pool.conn).unwrap(), 2);
        assert!(load_entries(&pool.conn).unwrap().iter().all(|e| e.paid));
    }

    #[test]
    fn rows_with_bad_dates_or_text_numbers_are_handled() {
        let pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute_batch(
                "INSERT INTO entries (date, hours, paid, pay_cut, created_at)
                 VALUES ('yesterday', 4, 0, 0, 'x');
                 INSERT INTO entries (date, hours, paid, pay_cut, created_at)
                 VALUES ('2025-08-09', '2.5', 0, 'oops', 'x');",
            )
            .unwrap();

        assert_eq!(load_raw_entries(&pool.conn).unwrap().len(), 2);
        let valid = load_entries(&pool.conn).unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].hours, 2.5);
        assert_eq!(valid[0].pay_cut, 0.0);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let pool = DbPool::in_memory().unwrap();
        for day in [1, 15, 31] {
            insert_entry(&pool.conn, &Entry::new(d(2025, 8, day), 1.0)).unwrap();
        }
        let got = load_entries_in_range(&pool.conn, Some((d(2025, 8, 1), d(2025, 8, 15)))).unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(load_entries_in_range(&pool.conn, None).unwrap().len(), 3);
    }
}
