//! Effective rate / weekly cap / payday resolution.
//!
//! Each numeric value walks the chain: persisted setting → config file
//! default → built-in constant. A link that is missing, non-finite or not
//! strictly positive is skipped.

use crate::config::{Config, FALLBACK_RATE, FALLBACK_WEEKLY_LIMIT};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::settings::{self, KEY_PAYDAY, KEY_RATE, KEY_WEEKLY_LIMIT};
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Database,
    ConfigFile,
    BuiltIn,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::Database => "saved setting",
            Source::ConfigFile => "config file",
            Source::BuiltIn => "built-in default",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub value: f64,
    pub source: Source,
}

fn usable(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite() && *x > 0.0)
}

pub fn resolve(persisted: Option<f64>, file_default: Option<f64>, constant: f64) -> Resolved {
    if let Some(value) = usable(persisted) {
        return Resolved {
            value,
            source: Source::Database,
        };
    }
    if let Some(value) = usable(file_default) {
        return Resolved {
            value,
            source: Source::ConfigFile,
        };
    }
    Resolved {
        value: constant,
        source: Source::BuiltIn,
    }
}

/// Effective configuration handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub rate: Resolved,
    pub weekly_limit: Resolved,
    pub payday: Option<NaiveDate>,
}

impl Settings {
    pub fn resolve(
        stored_rate: Option<&str>,
        stored_limit: Option<&str>,
        stored_payday: Option<&str>,
        cfg: &Config,
    ) -> Self {
        let parse = |s: Option<&str>| s.and_then(|v| v.trim().parse::<f64>().ok());

        Self {
            rate: resolve(parse(stored_rate), Some(cfg.default_rate), FALLBACK_RATE),
            weekly_limit: resolve(
                parse(stored_limit),
                Some(cfg.default_weekly_limit),
                FALLBACK_WEEKLY_LIMIT,
            ),
            payday: stored_payday.and_then(|s| date::parse_date(s.trim())),
        }
    }

    pub fn load(pool: &mut DbPool, cfg: &Config) -> AppResult<Self> {
        let rate = settings::get_setting(&pool.conn, KEY_RATE)?;
        let limit = settings::get_setting(&pool.conn, KEY_WEEKLY_LIMIT)?;
        let payday = settings::get_setting(&pool.conn, KEY_PAYDAY)?;

        Ok(Self::resolve(
            rate.as_deref(),
            limit.as_deref(),
            payday.as_deref(),
            cfg,
        ))
    }

    pub fn rate(&self) -> f64 {
        self.rate.value
    }

    pub fn weekly_limit(&self) -> f64 {
        self.weekly_limit.value
    }
}

/// Requested changes of the `settings` command; `None` leaves a value alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub rate: Option<f64>,
    pub weekly_limit: Option<f64>,
    pub payday: Option<NaiveDate>,
    pub clear_payday: bool,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.rate.is_none()
            && self.weekly_limit.is_none()
            && self.payday.is_none()
            && !self.clear_payday
    }
}

pub struct SettingsLogic;

impl SettingsLogic {
    /// Persist the requested values, returns a description of each change.
    ///
    /// Rate and limit must be finite and strictly positive.
    pub fn save(pool: &mut DbPool, update: &SettingsUpdate) -> AppResult<Vec<String>> {
        if let Some(r) = update.rate
            && usable(Some(r)).is_none()
        {
            return Err(AppError::InvalidRate(r.to_string()));
        }
        if let Some(l) = update.weekly_limit
            && usable(Some(l)).is_none()
        {
            return Err(AppError::InvalidLimit(l.to_string()));
        }

        let mut changes = Vec::new();

        if let Some(r) = update.rate {
            settings::set_setting(&pool.conn, KEY_RATE, &r.to_string())?;
            changes.push(format!("hourly rate = {r}"));
        }
        if let Some(l) = update.weekly_limit {
            settings::set_setting(&pool.conn, KEY_WEEKLY_LIMIT, &l.to_string())?;
            changes.push(format!("weekly limit = {l}"));
        }
        if update.clear_payday && settings::clear_setting(&pool.conn, KEY_PAYDAY)? {
            changes.push("payday cleared".to_string());
        }
        if let Some(p) = update.payday {
            settings::set_setting(&pool.conn, KEY_PAYDAY, &p.format("%Y-%m-%d").to_string())?;
            changes.push(format!("payday = {p}"));
        }

        for c in &changes {
            ttlog_quiet(&pool.conn, "settings", "", c);
        }

        Ok(changes)
    }
}
