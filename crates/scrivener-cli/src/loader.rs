//! Plain-text document loading.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File extensions read as plain text (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Read a UTF-8 text document.
///
/// Files without an extension are accepted. The size check runs before the
/// file is read.
pub fn load_document(path: &Path, max_bytes: u64) -> Result<String> {
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(CliError::UnsupportedFormat(format!(".{}", ext)));
        }
    }

    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(CliError::InputTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        CliError::InvalidInput(format!("{} is not valid UTF-8 text", path.display()))
    })?;

    debug!("Loaded {} ({} bytes)", path.display(), size);
    Ok(text)
}
