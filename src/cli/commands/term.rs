use crate::cli::parser::{Commands, TermAction};
use crate::config::Config;
use crate::core::term::TermLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{require_date, today};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Term { action } = cmd {
        match action {
            TermAction::Add { start, end } => {
                let s = require_date(start)?;
                let e = require_date(end)?;

                let mut pool = DbPool::new(&cfg.database)?;
                let term = TermLogic::add(&mut pool, s, e)?;
                success(format!("Term #{} added: {} → {}", term.id, term.start, term.end));
                if s > e {
                    warning("Start is after end: this term will never apply.");
                }
            }
            TermAction::List => {
                let mut pool = DbPool::new(&cfg.database)?;
                let terms = TermLogic::list(&mut pool)?;
                if terms.is_empty() {
                    info("No terms defined.");
                    return Ok(());
                }

                let now = today();
                let mut t = Table::new(vec!["ID", "Start", "End", "Active"]);
                for term in &terms {
                    t.add_row(vec![
                        term.id.to_string(),
                        term.start.to_string(),
                        term.end.to_string(),
                        if term.contains(now) { "yes" } else { "" }.to_string(),
                    ]);
                }
                print!("{}", t.render());
            }
            TermAction::Del { id } => {
                let mut pool = DbPool::new(&cfg.database)?;
                TermLogic::delete(&mut pool, *id)?;
                success(format!("Term #{id} deleted."));
            }
        }
    }
    Ok(())
}
