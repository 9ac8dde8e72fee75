use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{mark_all_paid, mark_paid};
use crate::errors::AppResult;

/// Flipping `paid` to true is the only in-place mutation an entry ever sees.
pub struct PaidLogic;

impl PaidLogic {
    pub fn mark(pool: &mut DbPool, id: i64) -> AppResult<()> {
        mark_paid(&pool.conn, id)?;
        ttlog_quiet(&pool.conn, "paid", &id.to_string(), &format!("Entry #{id} marked paid"));
        Ok(())
    }

    pub fn mark_all(pool: &mut DbPool) -> AppResult<usize> {
        let n = mark_all_paid(&pool.conn)?;
        ttlog_quiet(&pool.conn, "paid", "all", &format!("{n} entries marked paid"));
        Ok(n)
    }
}
