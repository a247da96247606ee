//! Atomic file operations
//!
//! Writes go to a sibling `<name>.tmp` file which is synced and then renamed
//! over the target. A reader sees either the old file or the new one, never
//! a partial write, and a crash before the rename leaves the old file intact.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for atomic operations
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Errors that can occur during atomic operations
#[derive(Debug, Error)]
pub enum AtomicError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),
}

impl From<AtomicError> for io::Error {
    fn from(e: AtomicError) -> Self {
        match e {
            AtomicError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}

/// Sibling temp path for `path`: `data/events.json` -> `data/events.json.tmp`
pub fn temp_path_for(path: &Path) -> AtomicResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| AtomicError::NoFileName(path.to_path_buf()))?;
    let mut temp_name = OsString::from(name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Atomically write content to a file
///
/// 1. Creates the parent directory if missing
/// 2. Writes content to `<path>.tmp` and syncs it
/// 3. Renames the temp file over `path`
///
/// ```ignore
/// atomic_write("data/events.json", "[]")?;
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> AtomicResult<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    Ok(())
}

/// Clean up any leftover temp files from interrupted writes
///
/// Call this on startup, before the first write.
pub fn cleanup_temp_files<P: AsRef<Path>>(dir: P) -> AtomicResult<usize> {
    let dir = dir.as_ref();
    let mut cleaned = 0;

    if !dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_file() && path.extension().is_some_and(|e| e == "tmp") {
            fs::remove_file(&path)?;
            cleaned += 1;
        }
    }

    Ok(cleaned)
}
