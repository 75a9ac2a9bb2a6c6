//! Path helpers for configuration documents.
//!
//! Responsibilities:
//! - Build the `<base>/<name>.yaml` document path.
//! - Check that a resolved document path is a regular file.
//!
//! Does NOT handle:
//! - Opening or parsing documents (see `document.rs`).

use std::path::{Path, PathBuf};

use crate::constants::DOCUMENT_EXTENSION;
use crate::error::ConfigError;

/// Returns the path of the document called `name` inside `base_path`.
pub fn document_path(base_path: impl AsRef<Path>, name: &str) -> PathBuf {
    base_path
        .as_ref()
        .join(format!("{name}.{DOCUMENT_EXTENSION}"))
}

/// Validates that `path` exists and is not a directory.
///
/// # Errors
///
/// - `ConfigError::Io` if the path cannot be stat'ed (kind `NotFound` when missing).
/// - `ConfigError::InvalidPath` if the path is a directory.
pub fn validate_config_path(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| ConfigError::io(path, e))?;
    if metadata.is_dir() {
        return Err(ConfigError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
