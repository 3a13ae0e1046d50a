//! Whole-file JSON reads and crash-safe whole-file JSON writes.
//!
//! Writes go to a sibling temporary file which is flushed to disk and then
//! renamed over the target.  A crash mid-write leaves either the old file or
//! the new one, never a truncated file that would later parse as empty state.
//! On Unix the directory is synced after the rename so the new entry itself
//! reaches the disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::StoreError;

/// Reads and parses `path`.  Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// [`StoreError::Io`] for read failures other than "not found" and
/// [`StoreError::Corrupt`] when the content is not valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Serializes `value` as pretty JSON and atomically replaces `path` with it.
///
/// Creates the parent directory if needed.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = temp_path_for(path);
    let io_err = |source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    };
    {
        let mut file = fs::File::create(&tmp_path).map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
    }

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    // The rename already succeeded, so a failed sync is not an error.
    if let Err(e) = sync_parent_dir(path) {
        warn!(path = %path.display(), "could not sync state directory: {e}");
    }

    debug!(path = %path.display(), bytes = content.len(), "wrote state file");
    Ok(())
}

/// Flushes the directory entry of `path` to disk.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    fs::File::open(dir)?.sync_all()
}

/// Directory handles cannot be synced this way outside Unix.
#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// `dir/name.json` → `dir/.name.json.tmp`, in the same directory so the
/// rename never crosses a filesystem boundary.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "state".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
