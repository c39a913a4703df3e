//! File system utility helpers (BOM-aware readers, etc.)
use std::fs;
use std::path::Path;

use super::errors::{CheckError, CheckResult};

/// Read a source file as UTF-8 text, stripping UTF-8 BOM if present.
pub fn read_source_file(path: &Path) -> CheckResult<String> {
    let mut content = fs::read_to_string(path).map_err(|source| CheckError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    if content.starts_with('\u{FEFF}') {
        content = content.trim_start_matches('\u{FEFF}').to_string();
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "read source file");
    Ok(content)
}
