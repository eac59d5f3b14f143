use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{entries_json, print_json, render_entry, EntryView};
use crate::ui::{badge, blank_line, print, Badge};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entries = store.search_entries(&args.query)?;

    if args.json {
        return print_json(&entries_json(&entries)?);
    }

    let ui = ctx.ui()?;
    if entries.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Info, &format!("No results for \"{}\"", args.query)));
        }
        return Ok(());
    }

    if !ctx.quiet() {
        print(&badge(
            &ui,
            Badge::Info,
            &format!("{} result(s) for \"{}\"", entries.len(), args.query),
        ));
    }
    for entry in &entries {
        blank_line(&ui);
        print(&render_entry(&ui, entry, EntryView::Short));
    }
    Ok(())
}
