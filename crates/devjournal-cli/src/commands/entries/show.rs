use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::{entry_json, print_json, render_entry, EntryView};
use crate::ui::print;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let entry = store.get_entry(args.id)?.ok_or_else(|| {
        CliError::not_found(
            format!("Entry #{} not found", args.id),
            "Run `devjournal list` to find entry IDs.",
        )
    })?;

    if args.json {
        print_json(&entry_json(&entry)?)?;
    } else {
        let ui = ctx.ui()?;
        print(&render_entry(&ui, &entry, EntryView::Full));
    }
    Ok(())
}
