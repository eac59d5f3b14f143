//! Output mode routing logic.

/// Output mode determines how human-readable results are formatted.
///
/// `--json` output bypasses the UI layer entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and formatting (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from the environment.
    ///
    /// Routing rules:
    /// 1. `TERM=dumb` forces plain
    /// 2. Pretty only when stdout is TTY
    pub fn resolve(is_tty: bool, term_is_dumb: bool) -> Self {
        if is_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        let mode = OutputMode::resolve(true, false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, false);
        assert_eq!(mode, OutputMode::Plain);
    }
}
