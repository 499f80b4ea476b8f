// src/file.rs

use std::{
    error::Error,
    fs,
    path::Path,
};

use crate::specs::facilities::FacilityRecord;

/// Write `records` as a pretty-printed JSON array, replacing any existing file.
/// Non-ASCII text is written as-is (UTF-8), never `\u` escaped.
pub fn save_to_json(records: &[FacilityRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(records)?;
    fs::write(path, contents)?;
    logf!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
