//! Draft and record file writers.

use crate::error::Result;
use crate::output::record_json;
use scrivener_domain::ResolutionRecord;
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name of the rendered draft inside the output directory.
pub const DRAFT_FILE_NAME: &str = "final_resolution.txt";

/// File name of the record JSON inside the output directory.
pub const RECORD_FILE_NAME: &str = "resolution_data.json";

/// Write text content, creating parent directories.
pub fn write_txt(content: &str, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Write a record as pretty-printed JSON, creating parent directories.
pub fn write_json(record: &ResolutionRecord, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(&record_json(record))?;
    fs::write(path, json)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
