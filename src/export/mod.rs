// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;

pub use fs_utils::confirm_overwrite;
pub use logic::ExportLogic;
pub use model::EntryExport;
pub use range::parse_range;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed ({rows} rows): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
