use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::settings::Settings;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::db::terms::load_terms;
use crate::errors::AppResult;
use crate::ui::dashboard;
use crate::utils::date::{require_date, today};

/// Recompute every figure from the stored entries and print them.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { at, payday } = cmd {
        let now = match at {
            Some(s) => require_date(s)?,
            None => today(),
        };
        let payday = payday.as_deref().map(require_date).transpose()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let settings = Settings::load(&mut pool, cfg)?;
        let entries = load_entries(&pool.conn)?;
        let terms = load_terms(&pool.conn)?;

        let dash = Core::build_dashboard(&entries, &terms, &settings, now, payday);

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", dashboard::render(&dash, sep));
    }
    Ok(())
}
