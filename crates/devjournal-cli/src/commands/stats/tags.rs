use devjournal_core::storage::TagCount;
use devjournal_core::EntryStore;

use crate::app::AppContext;
use crate::ui::{badge, bar, blank_line, header, print, simple_table, Badge, Column, UiContext};

fn render(ui: &UiContext, tags: &[TagCount]) -> String {
    let columns = [Column::new("Tag"), Column::new(""), Column::new("Count")];
    let rows: Vec<Vec<String>> = tags
        .iter()
        .map(|t| vec![format!("#{}", t.tag), bar(t.count), t.count.to_string()])
        .collect();
    format!(
        "{}\n{}",
        header(ui, "tag-cloud", None),
        simple_table(ui, &columns, &rows)
    )
}

fn quiet_lines(tags: &[TagCount]) -> String {
    tags.iter()
        .map(|t| format!("{}\t{}", t.tag, t.count))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle_tag_cloud(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let tags = store.tag_frequency()?;
    let ui = ctx.ui()?;

    if tags.is_empty() {
        if !ctx.quiet() {
            print(&badge(&ui, Badge::Warn, "No tags yet"));
        }
        return Ok(());
    }

    if ctx.quiet() {
        print(&quiet_lines(&tags));
        return Ok(());
    }

    blank_line(&ui);
    print(&render(&ui, &tags));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::tests::plain_ctx;

    #[test]
    fn test_quiet_lines_have_no_header_or_bars() {
        let tags = vec![
            TagCount {
                tag: "rust".to_string(),
                count: 3,
            },
            TagCount {
                tag: "ci".to_string(),
                count: 1,
            },
        ];
        assert_eq!(quiet_lines(&tags), "rust\t3\nci\t1");
    }

    #[test]
    fn test_render_plain() {
        let tags = vec![
            TagCount {
                tag: "python".to_string(),
                count: 2,
            },
            TagCount {
                tag: "api".to_string(),
                count: 1,
            },
        ];
        let out = render(&plain_ctx(), &tags);
        assert_eq!(
            out,
            "devjournal tag-cloud\n#python\t\u{2588}\u{2588}\t2\n#api\t\u{2588}\t1"
        );
    }
}
