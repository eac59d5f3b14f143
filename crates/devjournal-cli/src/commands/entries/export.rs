//! Markdown export command handler.

use std::path::PathBuf;

use log::debug;

use devjournal_core::fs::write_atomic;
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::constants::DEFAULT_EXPORT_START;
use crate::helpers::parse_date;
use crate::output::{export_file_name, render_export};
use crate::ui::{badge, print, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let start = parse_date(args.start.as_deref().unwrap_or(DEFAULT_EXPORT_START))?;
    let end = match args.end.as_deref() {
        Some(value) => parse_date(value)?,
        None => ctx.today(),
    };

    let store = ctx.open_store()?;
    let entries = store.entries_between(start, end)?;
    let ui = ctx.ui()?;

    if entries.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Warn, "No entries in range"));
        }
        return Ok(());
    }

    let destination = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export_file_name(start, end)));
    let document = render_export(start, end, &entries);
    write_atomic(&destination, document.as_bytes())?;
    debug!("Wrote {} bytes to {}", document.len(), destination.display());

    if ctx.quiet() {
        println!("{}", destination.display());
    } else {
        print(&badge(
            &ui,
            Badge::Ok,
            &format!(
                "Exported {} entries to {}",
                entries.len(),
                destination.display()
            ),
        ));
    }
    Ok(())
}
