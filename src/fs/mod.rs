//! Atomic file replacement.
//!
//! Manifests must never be observed half-written, so every rewrite goes
//! through a temporary file in the target's directory followed by an OS-level
//! atomic rename. The temporary file is removed on any failure path before
//! the rename.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Replaces `path` with `contents` atomically.
///
/// The temporary file is created next to `path` so the final rename stays on
/// one filesystem. On error the temporary file is cleaned up by its drop
/// guard and `path` is left untouched.
pub fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    log::debug!("Replaced: {}", path.display());
    Ok(())
}
