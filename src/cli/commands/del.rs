use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::{RawEntry, TIME_PLACEHOLDER};
use crate::ui::messages::{confirm, info, success, warning};

/// Stored values as they are, so a row with a broken date can still be recognised.
fn describe(e: &RawEntry) -> String {
    let time = |t: &str| {
        if t.trim().is_empty() {
            TIME_PLACEHOLDER.to_string()
        } else {
            t.to_string()
        }
    };
    let hours = e
        .hours
        .map(|h| format!("{h} h"))
        .unwrap_or_else(|| "? h".to_string());

    format!(
        "#{} · {} {} → {} · {}",
        e.id,
        e.date,
        time(&e.start),
        time(&e.end),
        hours
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let entry = DeleteLogic::preview(&mut pool, *id)?;

        if !*yes {
            warning(format!("Entry {} will be removed for good.", describe(&entry)));
            if !confirm("Delete it?") {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;
        success(format!(
            "Entry #{} ({}) has been deleted.",
            removed.id, removed.date
        ));
    }

    Ok(())
}
