//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Log file
    // ---------------------------
    #[error("Malformed log file at line {line}: `{content}` ({reason})")]
    MalformedLog {
        line: usize,
        content: String,
        reason: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Index must be a number from 1 to {len} (got {index})")]
    InvalidIndex { index: usize, len: usize },

    #[error("Work day hours must be a number from 1 to 24 (got {0})")]
    InvalidHours(f64),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Incomplete entry: {0}")]
    IncompleteEntry(String),

    #[error("No entries recorded yet")]
    NoEntries,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        AppError::MalformedLog {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
