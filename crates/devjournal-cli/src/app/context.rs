//! Application context for the devjournal CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::debug;
use once_cell::unsync::OnceCell;

use devjournal_core::storage::Mood;
use devjournal_core::{EntryStore, SqliteStore, StoreConfig};

use crate::cli::Cli;
use crate::config::{read_config, JournalConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_journal_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<JournalConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading it lazily. A missing file is `None`.
    pub fn config(&self) -> anyhow::Result<Option<&JournalConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                debug!("No config file at {}", path.display());
                return Ok::<_, anyhow::Error>(None);
            }
            debug!("Loading config from {}", path.display());
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Resolved location of the journal store.
    pub fn journal_path(&self) -> anyhow::Result<PathBuf> {
        resolve_journal_path(self.cli.journal.as_deref(), self.config()?)
    }

    /// Open (and initialize if needed) the journal store.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.journal_path()?;
        Ok(SqliteStore::open(&StoreConfig::new(path))?)
    }

    /// Mood used by `add` when `--mood` is omitted.
    pub fn default_mood(&self) -> anyhow::Result<Mood> {
        Ok(self
            .config()?
            .and_then(|c| c.ui.default_mood)
            .unwrap_or_default())
    }

    /// UI context for human-readable output, honoring `--no-color` and `[ui] color`.
    pub fn ui(&self) -> anyhow::Result<UiContext> {
        let color_disabled = self
            .config()?
            .and_then(|c| c.ui.color)
            .map(|enabled| !enabled)
            .unwrap_or(false);
        Ok(UiContext::from_env(self.cli.no_color || color_disabled))
    }

    /// Local calendar day used for "today" and default ranges.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
