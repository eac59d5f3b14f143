//! Store location configuration.

use std::path::{Path, PathBuf};

use crate::error::{JournalError, Result};

/// File name of the journal database inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "journal.db";

/// Where the journal store lives on disk.
///
/// Always passed explicitly into [`SqliteStore::open`](super::SqliteStore::open)
/// so callers (and tests) decide which file backs the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the per-user default location:
    /// `$XDG_DATA_HOME/devjournal/journal.db`, falling back to
    /// `$HOME/.local/share/devjournal/journal.db`.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(data_dir()?.join(DEFAULT_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("devjournal"));
        }
    }
    let home = std::env::var("HOME").map_err(|_| {
        JournalError::Storage("HOME is not set; cannot resolve default journal path".to_string())
    })?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("devjournal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_path() {
        let config = StoreConfig::new("/tmp/journal.db");
        assert_eq!(config.path(), Path::new("/tmp/journal.db"));
    }

    #[test]
    fn test_default_location_file_name() {
        // Either XDG_DATA_HOME or HOME is set in any sane test environment.
        if let Ok(config) = StoreConfig::default_location() {
            assert!(config.path.ends_with("devjournal/journal.db"));
        }
    }
}
