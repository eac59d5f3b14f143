//! Markdown export rendering.

use chrono::NaiveDate;

use devjournal_core::storage::Entry;

use crate::ui::format::{format_hours, format_tags};

/// Default export file name for an inclusive range.
pub fn export_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("journal_{}_{}.md", start, end)
}

/// Render entries (already sorted by date) as a Markdown document.
pub fn render_export(start: NaiveDate, end: NaiveDate, entries: &[Entry]) -> String {
    let mut out = format!("# Dev Journal Export  {} \u{2192} {}\n\n", start, end);

    for entry in entries {
        out.push_str(&format!("## {} \u{2013} {}\n\n", entry.date, entry.title));
        out.push_str(&format!(
            "**Mood:** {}  **Focus:** {}\n\n",
            entry.mood,
            format_hours(entry.focus_hours)
        ));
        if !entry.tags.is_empty() {
            out.push_str(&format!("**Tags:** {}\n\n", format_tags(&entry.tags)));
        }
        if !entry.body.is_empty() {
            out.push_str(&entry.body);
            out.push_str("\n\n");
        }
        push_section(&mut out, "Accomplishments", &entry.accomplishments);
        push_section(&mut out, "Blockers", &entry.blockers);
    }

    out
}

fn push_section(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("**{}:**\n", label));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use devjournal_core::storage::Mood;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn entry(date: NaiveDate, title: &str) -> Entry {
        Entry {
            id: 1,
            date,
            title: title.to_string(),
            body: String::new(),
            tags: Vec::new(),
            mood: Mood::Ok,
            focus_hours: 0.0,
            accomplishments: Vec::new(),
            blockers: Vec::new(),
            tomorrow: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(day(1), day(31)), "journal_2024-01-01_2024-01-31.md");
    }

    #[test]
    fn test_render_minimal_entry() {
        let doc = render_export(day(1), day(31), &[entry(day(2), "Setup")]);
        assert_eq!(
            doc,
            "# Dev Journal Export  2024-01-01 → 2024-01-31\n\n\
             ## 2024-01-02 – Setup\n\n\
             **Mood:** ok  **Focus:** 0h\n\n"
        );
    }

    #[test]
    fn test_render_full_entry() {
        let mut e = entry(day(5), "Deploy");
        e.mood = Mood::Great;
        e.focus_hours = 4.5;
        e.tags = vec!["devops".to_string(), "k8s".to_string()];
        e.body = "Rolled out v2.".to_string();
        e.accomplishments = vec!["canary".to_string(), "full rollout".to_string()];
        e.blockers = vec!["dns".to_string()];
        e.tomorrow = vec!["postmortem".to_string()];

        let doc = render_export(day(1), day(31), &[e]);
        assert!(doc.contains("**Mood:** great  **Focus:** 4.5h\n\n"));
        assert!(doc.contains("**Tags:** #devops, #k8s\n\n"));
        assert!(doc.contains("Rolled out v2.\n\n"));
        assert!(doc.contains("**Accomplishments:**\n- canary\n- full rollout\n\n"));
        assert!(doc.contains("**Blockers:**\n- dns\n\n"));
        assert!(!doc.contains("postmortem"));
    }

    #[test]
    fn test_render_keeps_entry_order() {
        let doc = render_export(
            day(1),
            day(31),
            &[entry(day(2), "first"), entry(day(9), "second")],
        );
        let first = doc.find("first").unwrap();
        let second = doc.find("second").unwrap();
        assert!(first < second);
    }
}
