use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{Settings, SettingsLogic, SettingsUpdate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::date::require_date;
use crate::utils::formatting::{format_currency, format_number};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        rate,
        limit,
        payday,
        clear_payday,
    } = cmd
    {
        let update = SettingsUpdate {
            rate: *rate,
            weekly_limit: *limit,
            payday: payday.as_deref().map(require_date).transpose()?,
            clear_payday: *clear_payday,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        if !update.is_empty() {
            for change in SettingsLogic::save(&mut pool, &update)? {
                success(format!("Saved: {change}"));
            }
        }

        let s = Settings::load(&mut pool, cfg)?;
        header("Settings");
        println!(
            "Hourly rate  : {}  ({})",
            format_currency(s.rate()),
            s.rate.source
        );
        println!(
            "Weekly limit : {} hrs  ({})",
            format_number(s.weekly_limit()),
            s.weekly_limit.source
        );
        match s.payday {
            Some(p) => println!("Payday       : {p}"),
            None => println!("Payday       : -"),
        }
    }
    Ok(())
}
