// src/export/logic.rs

use crate::core::calculator::totals::sealed_totals;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::models::entry::Entry;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export sealed entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of the expressions accepted by
    ///   [`parse_range`]
    pub fn export(
        entries: &[Entry],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = Self::rows(entries, date_bounds)?;
        debug!(rows = rows.len(), format = format.as_str(), "export rows selected");

        if rows.is_empty() {
            warning("No completed entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }

    /// Rows for every sealed entry whose date falls inside `bounds`.
    pub fn rows(
        entries: &[Entry],
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<EntryExport>> {
        let mut rows = Vec::new();
        for entry in entries.iter().filter(|e| e.is_sealed()) {
            if let Some((from, to)) = bounds
                && (entry.date() < from || entry.date() > to)
            {
                continue;
            }
            let totals = sealed_totals(entry)?;
            if let Some(row) = EntryExport::from_entry(entry, &totals) {
                rows.push(row);
            }
        }
        Ok(rows)
    }
}
