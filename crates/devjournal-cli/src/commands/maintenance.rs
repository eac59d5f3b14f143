//! Integrity check and shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use devjournal_core::{EntryStore, JournalError};

use crate::app::AppContext;
use crate::cli::{Cli, CompletionsArgs};
use crate::errors::CliError;
use crate::ui::format::format_datetime;
use crate::ui::{badge, kv, print, Badge};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    match store.check_integrity() {
        Ok(()) => {}
        Err(JournalError::Storage(message)) => {
            return Err(CliError::IntegrityFailed(format!(
                "Integrity check failed: {}",
                message
            ))
            .into());
        }
        Err(other) => return Err(other.into()),
    }

    if ctx.quiet() {
        return Ok(());
    }

    let ui = ctx.ui()?;
    let metadata = store.metadata()?;
    let pretty = ui.mode.is_pretty();
    print(&badge(&ui, Badge::Ok, "Integrity check passed"));
    print(&format!("  {}", kv(&ui, "Path", &ctx.journal_path()?.display().to_string())));
    print(&format!("  {}", kv(&ui, "Entries", &store.entry_count()?.to_string())));
    print(&format!("  {}", kv(&ui, "Format", &metadata.format_version)));
    print(&format!(
        "  {}",
        kv(&ui, "Last modified", &format_datetime(&metadata.last_modified, pretty))
    ));
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
