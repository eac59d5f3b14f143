//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (entry id).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Number of entries `list` shows when `--limit` is omitted.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// First day `export-md` covers when `--start` is omitted.
pub const DEFAULT_EXPORT_START: &str = "2020-01-01";
