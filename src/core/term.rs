use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::terms::{delete_term, insert_term, load_terms};
use crate::errors::AppResult;
use crate::models::term::Term;
use chrono::NaiveDate;

pub struct TermLogic;

impl TermLogic {
    /// No overlap or ordering validation: a reversed range is stored as-is
    /// and simply never contains any day.
    pub fn add(pool: &mut DbPool, start: NaiveDate, end: NaiveDate) -> AppResult<Term> {
        let mut term = Term::new(start, end);
        term.id = insert_term(&pool.conn, &term)?;

        ttlog_quiet(
            &pool.conn,
            "term",
            &term.id.to_string(),
            &format!("Added term {} → {}", start, end),
        );
        Ok(term)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Term>> {
        load_terms(&pool.conn)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        delete_term(&pool.conn, id)?;
        ttlog_quiet(&pool.conn, "term", &id.to_string(), &format!("Deleted term #{id}"));
        Ok(())
    }
}
