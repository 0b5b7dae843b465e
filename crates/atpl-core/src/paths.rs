//! Path helpers shared by the scaffolding pipeline

use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;

use crate::error::{Error, Result};

/// Convert a path known to be valid UTF-8 into a `Utf8PathBuf`.
pub fn utf8_path(path: &Path) -> Result<Utf8PathBuf> {
    Utf8Path::from_path(path)
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| Error::invalid_path(path.display().to_string()))
}

/// Compute `path` relative to `base` as a UTF-8 path.
pub fn relative_utf8(path: &Path, base: &Utf8Path) -> Result<Utf8PathBuf> {
    let rel = path
        .strip_prefix(base.as_std_path())
        .map_err(|_| Error::invalid_path(path.display().to_string()))?;
    utf8_path(rel)
}

/// Check whether a directory exists and contains no entries.
pub fn dir_is_empty(path: &Utf8Path) -> Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}
