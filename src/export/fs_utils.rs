// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// A missing target, or `force`, needs no question; otherwise the user must
/// agree to overwrite.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    if !confirm("Overwrite it?") {
        return Err(AppError::Export(format!(
            "export cancelled, '{}' left untouched",
            path.display()
        )));
    }

    info("Existing file will be overwritten.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_forced_targets_are_writable() {
        let path = std::env::temp_dir().join("rshiftlog_fs_utils_target.csv");
        std::fs::remove_file(&path).ok();
        assert!(ensure_writable(&path, false).is_ok());

        std::fs::write(&path, "x").unwrap();
        assert!(ensure_writable(&path, true).is_ok());
        std::fs::remove_file(&path).ok();
    }
}
