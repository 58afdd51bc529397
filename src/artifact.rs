// ABOUTME: Publishes durable artifacts (notes, reports) without partial reads
// ABOUTME: or overwrites: write a hidden temp file, then link it into place.

use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::PersistenceError;

/// Write `contents` to `path` unless a file already exists there.
///
/// The bytes are written to a temp file in `dir` (named `.<random>.tmp`, so
/// `*.json` / `*.md` listings never match it) and then published without
/// clobbering. Readers see either nothing or the complete file. Returns
/// `Ok(false)` when `path` is already taken; the temp file is removed.
pub(crate) fn write_new(dir: &Path, path: &Path, contents: &[u8]) -> Result<bool, PersistenceError> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| PersistenceError::io(dir, e))?;
    tmp.write_all(contents)
        .map_err(|e| PersistenceError::io(dir, e))?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(PersistenceError::io(path, e.error)),
    }
}
