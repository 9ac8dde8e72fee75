//! Key/value store for persisted settings (rate, weekly limit, payday).

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_RATE: &str = "hourly_rate";
pub const KEY_WEEKLY_LIMIT: &str = "weekly_limit";
pub const KEY_PAYDAY: &str = "payday";

pub fn get_setting(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |r| {
            r.get(0)
        })
        .optional()?)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Returns true when a value was actually removed.
pub fn clear_setting(conn: &Connection, key: &str) -> AppResult<bool> {
    Ok(conn.execute("DELETE FROM settings WHERE key = ?1", [key])? > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    #[test]
    fn set_overwrites_and_clear_removes() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(get_setting(&pool.conn, KEY_RATE).unwrap(), None);

        set_setting(&pool.conn, KEY_RATE, "11").unwrap();
        set_setting(&pool.conn, KEY_RATE, "12.5").unwrap();
        assert_eq!(get_setting(&pool.conn, KEY_RATE).unwrap().as_deref(), Some("12.5"));

        assert!(clear_setting(&pool.conn, KEY_RATE).unwrap());
        assert!(!clear_setting(&pool.conn, KEY_RATE).unwrap());
    }
}
