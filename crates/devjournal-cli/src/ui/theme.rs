//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

use devjournal_core::storage::Mood;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Symbol shown in front of the message.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ok => "\u{2713}",   // ✓
            Self::Warn => "\u{26A0}", // ⚠
            Self::Err => "\u{2717}",  // ✗
            Self::Info => "\u{2139}", // ℹ
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Warn => styles::yellow(),
            Self::Err => styles::red(),
            Self::Info => styles::cyan(),
        }
    }
}

/// Icon for a mood.
pub fn mood_icon(mood: Mood) -> &'static str {
    match mood {
        Mood::Great => "\u{1F680}", // 🚀
        Mood::Good => "\u{1F60A}",  // 😊
        Mood::Ok => "\u{1F610}",    // 😐
        Mood::Rough => "\u{1F614}", // 😔
    }
}

/// Named styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn yellow() -> Style {
        Style::new().yellow()
    }

    pub fn red() -> Style {
        Style::new().red()
    }

    pub fn cyan() -> Style {
        Style::new().cyan()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
