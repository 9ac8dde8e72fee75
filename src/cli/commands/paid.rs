use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::paid::PaidLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Paid { id, all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *all {
            let n = PaidLogic::mark_all(&mut pool)?;
            success(format!("{n} entries marked as paid."));
        } else if let Some(id) = id {
            PaidLogic::mark(&mut pool, *id)?;
            success(format!("Entry #{id} marked as paid."));
        }
    }
    Ok(())
}
