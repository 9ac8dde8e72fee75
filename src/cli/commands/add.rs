use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddRequest};
use crate::core::settings::Settings;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::{format_currency, format_hours};
use crate::utils::time::parse_optional_time;

/// Log a new shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        hours,
        pay_cut,
    } = cmd
    {
        //
        // 1. Parse input (date mandatory, times optional)
        //
        let req = AddRequest {
            date: Some(date::require_date(date)?),
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            hours: *hours,
            pay_cut: *pay_cut,
        };

        //
        // 2. Store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let entry = AddLogic::apply(&mut pool, &req)?;
        let rate = Settings::load(&mut pool, cfg)?.rate();

        success(format!(
            "Entry #{} saved: {} {} → {} · {} · {}",
            entry.id,
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            format_hours(entry.hours),
            format_currency(entry.earnings(rate))
        ));
    }

    Ok(())
}
