use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::Settings;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let rate = Settings::load(&mut pool, cfg)?.rate();
        ExportLogic::export(&mut pool, rate, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
