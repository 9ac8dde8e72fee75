use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::Settings;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_in_range;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::ui::messages::info;
use crate::utils::date::parse_period;
use crate::utils::formatting::{format_currency, format_number};
use crate::utils::table::Table;

pub fn history_table(entries: &[Entry], rate: f64, separator: char) -> String {
    let mut t = Table::new(vec![
        "ID", "Date", "Start", "End", "Hours", "Earnings", "Paid", "PayCut",
    ])
    .with_separator(separator);

    for e in entries {
        t.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.start_str(),
            e.end_str(),
            format_number(e.hours),
            format_currency(e.earnings(rate)),
            if e.paid { "Paid" } else { "Unpaid" }.to_string(),
            format_number(e.pay_cut),
        ]);
    }

    t.render()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let rate = Settings::load(&mut pool, cfg)?.rate();
        let entries = load_entries_in_range(&pool.conn, bounds)?;

        if entries.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", history_table(&entries, rate, sep));
    }
    Ok(())
}
