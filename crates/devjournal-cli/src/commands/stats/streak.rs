use devjournal_core::stats::current_streak;
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::ui::{badge, kv, print, Badge};

pub fn handle_streak(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let dates = store.distinct_dates()?;
    let ui = ctx.ui()?;

    if dates.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Info, "No entries yet"));
        }
        return Ok(());
    }

    let streak = current_streak(&dates);
    if ctx.quiet() {
        println!("{}", streak);
        return Ok(());
    }

    print(&badge(&ui, Badge::Ok, &format!("Current streak: {} day(s)", streak)));
    print(&format!("  {}", kv(&ui, "Total days with entries", &dates.len().to_string())));
    Ok(())
}
