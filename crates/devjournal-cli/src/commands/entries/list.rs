use devjournal_core::storage::EntryFilter;
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::parse_mood;
use crate::output::{entries_json, print_json, render_entry, EntryView};
use crate::ui::{badge, blank_line, print, Badge};

/// Translate `list` flags into a store filter.
fn build_filter(args: &ListArgs) -> anyhow::Result<EntryFilter> {
    let mut filter = EntryFilter::new().limit(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));
    if let Some(ref tag) = args.tag {
        filter = filter.tag(tag.trim().trim_start_matches('#'));
    }
    if let Some(ref mood) = args.mood {
        filter = filter.mood(parse_mood(mood)?);
    }
    Ok(filter)
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let filter = build_filter(args)?;
    let store = ctx.open_store()?;
    let entries = store.list_entries(&filter)?;

    if args.json {
        return print_json(&entries_json(&entries)?);
    }

    let ui = ctx.ui()?;
    if entries.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Warn, "No entries"));
        }
        return Ok(());
    }

    for entry in &entries {
        blank_line(&ui);
        print(&render_entry(&ui, entry, EntryView::Short));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devjournal_core::storage::Mood;

    fn args() -> ListArgs {
        ListArgs {
            tag: None,
            mood: None,
            limit: None,
            json: false,
        }
    }

    #[test]
    fn test_default_filter_uses_list_limit() {
        let filter = build_filter(&args()).unwrap();
        assert_eq!(filter.limit, Some(DEFAULT_LIST_LIMIT));
        assert!(filter.tag.is_none());
        assert!(filter.mood.is_none());
    }

    #[test]
    fn test_filter_strips_hash_from_tag() {
        let mut a = args();
        a.tag = Some("#rust".to_string());
        a.mood = Some("rough".to_string());
        a.limit = Some(5);
        let filter = build_filter(&a).unwrap();
        assert_eq!(filter.tag.as_deref(), Some("rust"));
        assert_eq!(filter.mood, Some(Mood::Rough));
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn test_filter_rejects_unknown_mood() {
        let mut a = args();
        a.mood = Some("meh".to_string());
        assert!(build_filter(&a).is_err());
    }
}
