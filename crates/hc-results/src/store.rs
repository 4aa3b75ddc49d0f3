//! JSON persistence of output records.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ResultsResult;

/// Write `output` as pretty JSON, creating parent directories.
pub fn save_output<T: Serialize>(path: &Path, output: &T) -> ResultsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(output)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_output<T: DeserializeOwned>(path: &Path) -> ResultsResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
