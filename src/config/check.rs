//! Reports fields missing from an existing configuration file.

use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const KNOWN_KEYS: [&str; 3] = ["log_file", "work_day_hours", "debug"];

/// Keys absent from the YAML file at `path` (defaults apply to them).
/// A missing file yields an empty list.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => KNOWN_KEYS
            .into_iter()
            .filter(|k| !map.contains_key(*k))
            .collect(),
        None => KNOWN_KEYS.to_vec(),
    };

    Ok(missing)
}
