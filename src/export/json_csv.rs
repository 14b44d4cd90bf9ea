// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", rows.len(), path);
    Ok(())
}

/// Export CSV (header row from the serde field names).
pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
