//! Atomic file I/O with locking

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write content atomically to a file.
///
/// Writes to a uniquely named temporary sibling file, syncs it, then
/// renames it over `path`. Readers see either the old or the new content,
/// never a partial write. The temporary file is removed if any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent
        }
        None => Path::new("."),
    };

    // Same directory keeps the rename on one filesystem
    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;
    temp_file.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Run `update` while holding an exclusive advisory lock for `path`.
///
/// The lock is taken on a `.<name>.lock` sidecar file rather than on `path`
/// itself, because [`write_atomic`] replaces the file being guarded. Use it
/// around read-modify-write cycles so concurrent writers, in this process or
/// another, apply their changes one after the other.
pub fn with_exclusive_lock<T>(path: &Path, update: impl FnOnce() -> Result<T>) -> Result<T> {
    let lock_path = lock_path_for(path);
    if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::io(&lock_path, e))?;

    lock_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    let result = update();
    let unlocked = FileExt::unlock(&lock_file);

    let value = result?;
    unlocked.map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    Ok(value)
}

fn lock_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.lock"))
}

/// Read a whole text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a whole text file, treating a missing file as `None`.
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}
