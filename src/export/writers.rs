// src/export/writers.rs

use crate::errors::AppResult;
use crate::export::model::{CsvRow, JsonEntry};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV with header row, written through serde.
pub(crate) fn export_csv(rows: &[CsvRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}

/// Pretty-printed JSON array.
pub(crate) fn export_json(entries: &[JsonEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", entries.len(), path);
    Ok(())
}
