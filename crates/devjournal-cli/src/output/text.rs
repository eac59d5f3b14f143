//! Text output formatting for entries.

use devjournal_core::storage::Entry;

use crate::ui::format::{format_hours, format_tags};
use crate::ui::theme::{mood_icon, styled, styles};
use crate::ui::UiContext;

/// How much of an entry to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryView {
    /// Header line, title and tags
    Short,
    /// Everything, including body and lists
    Full,
}

/// Render an entry for the terminal.
pub fn render_entry(ctx: &UiContext, entry: &Entry, view: EntryView) -> String {
    let mut lines = Vec::new();

    let heading = format!(
        "[{}] {}  {} {}  \u{23F1} {}",
        entry.id,
        entry.date,
        mood_icon(entry.mood),
        entry.mood.as_str().to_uppercase(),
        format_hours(entry.focus_hours)
    );
    lines.push(styled(&heading, styles::bold(), ctx.color));
    lines.push(styled(&entry.title, styles::cyan(), ctx.color));
    if !entry.tags.is_empty() {
        lines.push(format!("  tags: {}", format_tags(&entry.tags)));
    }

    if view == EntryView::Short {
        return lines.join("\n");
    }

    if !entry.body.is_empty() {
        lines.push(String::new());
        lines.push(entry.body.clone());
        lines.push(String::new());
    }
    push_list(
        &mut lines,
        ctx,
        "Accomplishments:",
        styles::green(),
        "\u{2713}",
        &entry.accomplishments,
    );
    push_list(
        &mut lines,
        ctx,
        "Blockers:",
        styles::red(),
        "\u{2717}",
        &entry.blockers,
    );
    push_list(
        &mut lines,
        ctx,
        "Tomorrow:",
        styles::yellow(),
        "\u{2192}",
        &entry.tomorrow,
    );

    lines.join("\n")
}

fn push_list(
    lines: &mut Vec<String>,
    ctx: &UiContext,
    label: &str,
    style: owo_colors::Style,
    marker: &str,
    items: &[String],
) {
    if items.is_empty() {
        return;
    }
    lines.push(styled(label, style, ctx.color));
    for item in items {
        lines.push(format!("  {} {}", marker, item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::tests::plain_ctx;
    use chrono::{NaiveDate, TimeZone, Utc};
    use devjournal_core::storage::Mood;

    fn sample() -> Entry {
        Entry {
            id: 12,
            date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            title: "Refactor parser".to_string(),
            body: "Split the lexer out.".to_string(),
            tags: vec!["rust".to_string(), "parser".to_string()],
            mood: Mood::Good,
            focus_hours: 3.5,
            accomplishments: vec!["lexer module".to_string()],
            blockers: vec!["flaky CI".to_string()],
            tomorrow: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 11, 17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_short_view() {
        let out = render_entry(&plain_ctx(), &sample(), EntryView::Short);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[12] 2024-03-11  😊 GOOD  ⏱ 3.5h");
        assert_eq!(lines[1], "Refactor parser");
        assert_eq!(lines[2], "  tags: #rust, #parser");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_full_view_includes_sections() {
        let out = render_entry(&plain_ctx(), &sample(), EntryView::Full);
        assert!(out.contains("Split the lexer out."));
        assert!(out.contains("Accomplishments:\n  ✓ lexer module"));
        assert!(out.contains("Blockers:\n  ✗ flaky CI"));
        assert!(!out.contains("Tomorrow:"));
    }

    #[test]
    fn test_full_view_without_tags_or_body() {
        let mut entry = sample();
        entry.tags.clear();
        entry.body.clear();
        entry.accomplishments.clear();
        entry.blockers.clear();
        let out = render_entry(&plain_ctx(), &entry, EntryView::Full);
        assert!(!out.contains("tags:"));
        assert_eq!(out.lines().count(), 2);
    }
}
