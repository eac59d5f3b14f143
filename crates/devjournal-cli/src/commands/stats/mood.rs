use devjournal_core::stats::{mood_window, MoodDistribution};
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::cli::MoodTrendArgs;
use crate::ui::theme::mood_icon;
use crate::ui::{badge, bar, blank_line, header, print, simple_table, Badge, Column, UiContext};

/// One table row per mood present in the window.
fn mood_rows(distribution: &MoodDistribution) -> Vec<Vec<String>> {
    distribution
        .shares
        .iter()
        .map(|share| {
            vec![
                format!("{} {}", mood_icon(share.mood), share.mood),
                bar(share.bar_width()),
                format!("{} ({:.0}%)", share.count, share.percent),
            ]
        })
        .collect()
}

/// Quiet form: one `mood<TAB>count` line per mood.
fn quiet_lines(distribution: &MoodDistribution) -> String {
    distribution
        .shares
        .iter()
        .map(|share| format!("{}\t{}", share.mood, share.count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(ui: &UiContext, days: u32, distribution: &MoodDistribution) -> String {
    let columns = [Column::new("Mood"), Column::new(""), Column::new("Entries")];
    let mut out = header(ui, "mood-trend", Some(&format!("last {} days", days)));
    out.push('\n');
    out.push_str(&simple_table(ui, &columns, &mood_rows(distribution)));
    out
}

pub fn handle_mood_trend(ctx: &AppContext, args: &MoodTrendArgs) -> anyhow::Result<()> {
    let days = args.days;
    let store = ctx.open_store()?;
    let (since, until) = mood_window(ctx.today(), days)?;
    let distribution = MoodDistribution::from_counts(&store.mood_counts(since, until)?);
    let ui = ctx.ui()?;

    if distribution.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Warn, "No data"));
        }
        return Ok(());
    }

    if ctx.quiet() {
        print(&quiet_lines(&distribution));
        return Ok(());
    }

    blank_line(&ui);
    print(&render(&ui, days, &distribution));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::tests::plain_ctx;
    use devjournal_core::storage::{Mood, MoodCount};

    #[test]
    fn test_mood_rows() {
        let distribution = MoodDistribution::from_counts(&[
            MoodCount {
                mood: Mood::Good,
                count: 1,
            },
            MoodCount {
                mood: Mood::Great,
                count: 3,
            },
        ]);
        let rows = mood_rows(&distribution);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "🚀 great");
        assert_eq!(rows[0][1].chars().count(), 15);
        assert_eq!(rows[0][2], "3 (75%)");
        assert_eq!(rows[1][2], "1 (25%)");
    }

    #[test]
    fn test_quiet_lines() {
        let distribution = MoodDistribution::from_counts(&[
            MoodCount {
                mood: Mood::Ok,
                count: 1,
            },
            MoodCount {
                mood: Mood::Great,
                count: 2,
            },
        ]);
        assert_eq!(quiet_lines(&distribution), "great\t2\nok\t1");
    }

    #[test]
    fn test_render_plain() {
        let distribution = MoodDistribution::from_counts(&[MoodCount {
            mood: Mood::Rough,
            count: 2,
        }]);
        let out = render(&plain_ctx(), 7, &distribution);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "devjournal mood-trend");
        assert!(lines[1].starts_with("😔 rough\t"));
        assert!(lines[1].ends_with("2 (100%)"));
    }
}
