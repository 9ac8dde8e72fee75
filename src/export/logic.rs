// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries_in_range;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{CsvRow, JsonEntry};
use crate::export::writers::{export_csv, export_json};
use crate::models::entry::Entry;
use crate::utils::date::parse_period;
use crate::utils::path::resolve_output_path;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    pub fn csv_rows(entries: &[Entry], rate: f64) -> Vec<CsvRow> {
        entries.iter().map(|e| CsvRow::from_entry(e, rate)).collect()
    }

    pub fn json_entries(entries: &[Entry], rate: f64) -> Vec<JsonEntry> {
        entries.iter().map(|e| JsonEntry::from_entry(e, rate)).collect()
    }

    /// Export entries to `file`.
    ///
    /// - `range`: `None`, `"all"` or any period accepted by `list --period`
    /// - earnings use `rate` (the effective hourly rate)
    /// - an empty selection is an error, nothing is written
    ///
    /// Returns the resolved output path.
    pub fn export(
        pool: &mut DbPool,
        rate: f64,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_output_path(file)?;

        let bounds = match range {
            None => None,
            Some(r) => parse_period(r)?,
        };

        let entries = load_entries_in_range(&pool.conn, bounds)?;
        if entries.is_empty() {
            return Err(AppError::NoEntries);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&Self::csv_rows(&entries, rate), &path)?,
            ExportFormat::Json => export_json(&Self::json_entries(&entries, rate), &path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} entries → {}", entries.len(), path.display()),
        );

        Ok(path)
    }
}
