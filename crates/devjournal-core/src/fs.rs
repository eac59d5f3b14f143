//! Filesystem utilities for atomic writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{JournalError, Result};

/// Write `data` to `destination` via a temp file in the same directory.
///
/// Readers never observe a half-written file: the content is synced to a
/// sibling temp file first and then renamed over the destination.
///
/// # Errors
///
/// Returns `JournalError::Io` if the temp file cannot be created, written or
/// renamed into place.
pub fn write_atomic(destination: &Path, data: &[u8]) -> Result<()> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let filename = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| JournalError::Storage("Invalid destination filename".to_string()))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| JournalError::Storage(format!("System time error: {}", e)))?
        .as_nanos();
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    if let Err(err) = file.write_all(data).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    rename_with_fallback(&temp_path, destination)?;
    Ok(())
}

/// Rename a file, retrying after removing the destination on platforms where
/// rename fails if the target exists. The temp file is removed on failure.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("export.md");

        write_atomic(&dest, b"# Dev Journal").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "# Dev Journal");
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("export.md");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("export.md");

        write_atomic(&dest, b"content").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["export.md".to_string()]);
    }

    #[test]
    fn test_write_atomic_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("export.md");

        let result = write_atomic(&dest, b"content");
        assert!(matches!(result, Err(JournalError::Io { .. })));
    }
}
