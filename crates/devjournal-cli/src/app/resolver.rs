//! Path resolution for config and journal files.

use std::path::PathBuf;

use devjournal_core::StoreConfig;

use crate::config::{default_config_path, JournalConfig};

/// Resolve the config file path, checking DEVJOURNAL_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DEVJOURNAL_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the journal store path.
///
/// Order: `--journal` / `DEVJOURNAL_PATH`, then `[journal] path` from the
/// config file, then the XDG data directory.
pub fn resolve_journal_path(
    flag: Option<&str>,
    config: Option<&JournalConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config.and_then(|c| c.journal.path.as_deref()) {
        return Ok(PathBuf::from(path));
    }

    Ok(StoreConfig::default_location()?.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_flag_wins_over_config() {
        let config = parse_config("[journal]\npath = \"/from/config.db\"\n").unwrap();
        let path = resolve_journal_path(Some("/from/flag.db"), Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.db"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let config = parse_config("[journal]\npath = \"/from/config.db\"\n").unwrap();
        let path = resolve_journal_path(None, Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.db"));
    }

    #[test]
    fn test_blank_flag_is_ignored() {
        let config = parse_config("[journal]\npath = \"/from/config.db\"\n").unwrap();
        let path = resolve_journal_path(Some("  "), Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.db"));
    }
}
