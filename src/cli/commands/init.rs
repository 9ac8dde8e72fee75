use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
///  - optionally, the demo shifts
pub fn handle(cli: &Cli) -> AppResult<()> {
    let demo = matches!(cli.command, Commands::Init { demo: true });

    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing rShiftLog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let mut pool = DbPool::new(&cfg.database)?;
    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", cfg.database),
    );

    if demo {
        let n = AddLogic::seed_demo(&mut pool)?;
        if n > 0 {
            success(format!("{n} sample entries added."));
        } else {
            info("Database already has entries: sample data skipped.");
        }
    }

    success("rShiftLog initialization completed!");
    Ok(())
}
