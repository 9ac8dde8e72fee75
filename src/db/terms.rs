use crate::errors::{AppError, AppResult};
use crate::models::term::Term;
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use chrono::Local;
use rusqlite::{Connection, params};

pub fn insert_term(conn: &Connection, term: &Term) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO terms (start_date, end_date, created_at) VALUES (?1, ?2, ?3)",
        params![
            term.start.format("%Y-%m-%d").to_string(),
            term.end.format("%Y-%m-%d").to_string(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Terms in insertion order. Rows with unreadable dates are skipped.
pub fn load_terms(conn: &Connection) -> AppResult<Vec<Term>> {
    let mut stmt = conn.prepare("SELECT id, start_date, end_date FROM terms ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (id, start, end) = r?;
        match (parse_date(&start), parse_date(&end)) {
            (Some(start), Some(end)) => out.push(Term { id, start, end }),
            _ => warning(format!("Skipping term #{id}: invalid dates '{start}' → '{end}'")),
        }
    }
    Ok(out)
}

pub fn delete_term(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM terms WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::TermNotFound(id));
    }
    Ok(())
}
