use std::path::{Path, PathBuf};

use serde::Deserialize;

use devjournal_core::storage::Mood;

/// Optional user configuration read from `config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub journal: JournalSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    pub color: Option<bool>,
    pub default_mood: Option<Mood>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<JournalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn parse_config(contents: &str) -> Result<JournalConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("devjournal"));
        }
    }
    Ok(home_dir()?.join(".config").join("devjournal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
[journal]
path = "/tmp/notes/journal.db"

[ui]
color = false
default_mood = "good"
"#,
        )
        .unwrap();
        assert_eq!(config.journal.path.as_deref(), Some("/tmp/notes/journal.db"));
        assert_eq!(config.ui.color, Some(false));
        assert_eq!(config.ui.default_mood, Some(Mood::Good));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.journal.path.is_none());
        assert!(config.ui.color.is_none());
        assert!(config.ui.default_mood.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_mood() {
        assert!(parse_config("[ui]\ndefault_mood = \"meh\"\n").is_err());
    }

    #[test]
    fn test_read_missing_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
