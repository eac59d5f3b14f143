use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::output::{render_entry, EntryView};
use crate::ui::{badge, blank_line, print, Badge};

pub fn handle_today(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let today = ctx.today();
    let entries = store.entries_on(today)?;
    let ui = ctx.ui()?;

    if entries.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Warn, &format!("No entries for {}", today)));
        }
        return Ok(());
    }

    for entry in &entries {
        blank_line(&ui);
        print(&render_entry(&ui, entry, EntryView::Full));
    }
    Ok(())
}
