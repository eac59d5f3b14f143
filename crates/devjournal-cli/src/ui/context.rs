//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// `no_color_flag` is set by `--no-color` or `[ui] color = false`.
    pub fn from_env(no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(is_tty, term_is_dumb);

        Self { color, width, mode }
    }
}

/// Terminal width from `COLUMNS`, if set.
fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(true);
        assert!(!ctx.color);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false);
        assert!(ctx.width > 0);
    }
}
