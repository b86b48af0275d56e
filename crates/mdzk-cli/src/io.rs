//! # Artifact File I/O
//!
//! Reading and writing raw-byte artifact files. Missing, unreadable, and
//! empty files each fail with a distinct message naming the artifact and
//! the path, so a user can tell a typo from a truncated file.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read an artifact file, rejecting empty files.
pub fn read_artifact(path: &Path, what: &str) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!("{what} file not found: {}", path.display());
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {what} file: {}", path.display()))?;
    if bytes.is_empty() {
        bail!("{what} file is empty: {}", path.display());
    }
    Ok(bytes)
}

/// Write an artifact file, refusing to persist empty content.
pub fn write_artifact(path: &Path, bytes: &[u8], what: &str) -> Result<()> {
    if bytes.is_empty() {
        bail!("refusing to write empty {what} artifact to {}", path.display());
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write {what} file: {}", path.display()))
}
