//! Add entry command handler.

use devjournal_core::storage::NewEntry;
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_date, parse_hours, parse_mood, split_list, split_tags};
use crate::ui::{badge, print, Badge};

/// Build the entry described by the command-line arguments.
fn build_entry(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<NewEntry> {
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => ctx.today(),
    };
    let mood = match args.mood.as_deref() {
        Some(value) => parse_mood(value)?,
        None => ctx.default_mood()?,
    };

    Ok(NewEntry::new(date, args.title.clone())
        .with_body(args.body.clone())
        .with_tags(split_tags(&args.tags))
        .with_mood(mood)
        .with_focus_hours(parse_hours(&args.hours)?)
        .with_accomplishments(split_list(&args.accomplishments))
        .with_blockers(split_list(&args.blockers))
        .with_tomorrow(split_list(&args.tomorrow)))
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let entry = build_entry(ctx, args)?;
    let mut store = ctx.open_store()?;
    let id = store.insert_entry(&entry)?;

    if ctx.quiet() {
        println!("{}", id);
        return Ok(());
    }

    let ui = ctx.ui()?;
    print(&badge(
        &ui,
        Badge::Ok,
        &format!("Journal entry #{} added for {}", id, entry.date),
    ));
    Ok(())
}
