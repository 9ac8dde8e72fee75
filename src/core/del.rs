use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_entry, find_raw_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry::RawEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// The stored row, unvalidated: rows the dashboard skips must stay
    /// reachable for deletion.
    pub fn preview(pool: &mut DbPool, id: i64) -> AppResult<RawEntry> {
        find_raw_entry(&pool.conn, id)?.ok_or(AppError::EntryNotFound(id))
    }

    /// Remove one entry, returning what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<RawEntry> {
        let entry = Self::preview(pool, id)?;

        delete_entry(&pool.conn, id)?;

        ttlog_quiet(
            &pool.conn,
            "del",
            &entry.date,
            &format!(
                "Deleted entry #{} ({} h)",
                id,
                entry.hours.unwrap_or(0.0)
            ),
        );

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::load_log;
    use crate::db::queries::{count_entries, insert_entry, load_entries};
    use crate::models::entry::Entry;
    use chrono::NaiveDate;

    #[test]
    fn delete_returns_the_removed_entry() {
        let mut pool = DbPool::in_memory().unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 8, 9).unwrap();
        let id = insert_entry(&pool.conn, &Entry::new(day, 5.0)).unwrap();

        let removed = DeleteLogic::apply(&mut pool, id).unwrap();
        assert_eq!(removed.hours, Some(5.0));
        assert_eq!(removed.date, "2025-08-09");
        assert_eq!(count_entries(&pool.conn).unwrap(), 0);
        assert!(matches!(
            DeleteLogic::apply(&mut pool, id),
            Err(AppError::EntryNotFound(_))
        ));
    }

    #[test]
    fn row_with_unreadable_date_can_still_be_deleted() {
        let mut pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute(
                "INSERT INTO entries (date, hours, paid, pay_cut, created_at)
                 VALUES ('yesterday', 4, 0, 0, 'x')",
                [],
            )
            .unwrap();
        let id = pool.conn.last_insert_rowid();
        assert!(load_entries(&pool.conn).unwrap().is_empty());

        let removed = DeleteLogic::apply(&mut pool, id).unwrap();
        assert_eq!(removed.date, "yesterday");
        assert_eq!(count_entries(&pool.conn).unwrap(), 0);

        let log = load_log(&pool.conn).unwrap();
        let last = log.last().unwrap();
        assert_eq!(last.operation, "del");
        assert_eq!(last.target, "yesterday");
    }
}
