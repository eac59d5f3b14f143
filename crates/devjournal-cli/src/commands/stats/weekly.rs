use devjournal_core::stats::{week_start, WeeklySummary};
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, header, kv, print, UiContext};

fn render(ui: &UiContext, summary: &WeeklySummary) -> String {
    let mut lines = vec![
        header(
            ui,
            "weekly",
            Some(&format!("{} \u{2192} {}", summary.start, summary.end)),
        ),
        format!("  {}", kv(ui, "Entries", &summary.entry_count.to_string())),
        format!(
            "  {}",
            kv(ui, "Focus hours", &format!("{:.1}", summary.focus_hours))
        ),
    ];

    if !summary.accomplishments.is_empty() {
        lines.push(String::new());
        lines.push(styled(
            "Accomplishments this week:",
            styles::green(),
            ui.color,
        ));
        for item in &summary.accomplishments {
            lines.push(format!("  \u{2713} {}", item));
        }
    }

    lines.join("\n")
}

/// Quiet form: entry count and focus hours, tab separated.
fn quiet_line(summary: &WeeklySummary) -> String {
    format!("{}\t{:.1}", summary.entry_count, summary.focus_hours)
}

pub fn handle_weekly(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let today = ctx.today();
    let start = week_start(today);
    let entries = store.entries_between(start, today)?;
    let summary = WeeklySummary::from_entries(start, today, &entries);

    if ctx.quiet() {
        println!("{}", quiet_line(&summary));
        return Ok(());
    }

    let ui = ctx.ui()?;
    blank_line(&ui);
    print(&render(&ui, &summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::tests::plain_ctx;
    use chrono::NaiveDate;

    fn summary(accomplishments: Vec<String>) -> WeeklySummary {
        WeeklySummary {
            start: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
            entry_count: 2,
            focus_hours: 5.0,
            accomplishments,
        }
    }

    #[test]
    fn test_render_plain_totals() {
        let out = render(&plain_ctx(), &summary(Vec::new()));
        assert_eq!(
            out,
            "devjournal weekly\n  entries=2\n  focus_hours=5.0"
        );
    }

    #[test]
    fn test_quiet_line() {
        assert_eq!(quiet_line(&summary(vec!["ship".to_string()])), "2\t5.0");
    }

    #[test]
    fn test_render_lists_accomplishments() {
        let out = render(
            &plain_ctx(),
            &summary(vec!["design doc".to_string(), "ship".to_string()]),
        );
        assert!(out.contains("Accomplishments this week:\n  ✓ design doc\n  ✓ ship"));
    }
}
