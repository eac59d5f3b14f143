use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use devjournal_core::VERSION;

/// devjournal - a daily developer log with search, streaks, and export
#[derive(Parser)]
#[command(name = "devjournal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(short, long, global = true, env = "DEVJOURNAL_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Entry body
    #[arg(long, default_value = "")]
    pub body: String,

    /// Comma-separated tags (a leading # is stripped)
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Mood: great, good, ok, rough
    #[arg(long)]
    pub mood: Option<String>,

    /// Hours of focused work
    #[arg(long, default_value = "0")]
    pub hours: String,

    /// Pipe-separated list of accomplishments
    #[arg(long, default_value = "")]
    pub accomplishments: String,

    /// Pipe-separated list of blockers
    #[arg(long, default_value = "")]
    pub blockers: String,

    /// Pipe-separated list of plans for tomorrow
    #[arg(long, default_value = "")]
    pub tomorrow: String,

    /// Day the entry belongs to (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Full-text query (FTS5 syntax; quote phrases)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Filter by mood
    #[arg(long)]
    pub mood: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `mood-trend` command
#[derive(Args)]
pub struct MoodTrendArgs {
    /// Size of the trailing window in days
    #[arg(long, default_value_t = devjournal_core::stats::DEFAULT_MOOD_WINDOW_DAYS)]
    pub days: u32,
}

/// Arguments for the `export-md` command
#[derive(Args)]
pub struct ExportArgs {
    /// First day to export (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day to export (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub end: Option<String>,

    /// Output file (defaults to journal_START_END.md)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a journal entry
    Add(AddArgs),

    /// Show today's entries
    Today,

    /// Show an entry by ID
    Show(ShowArgs),

    /// Full-text search
    Search(SearchArgs),

    /// List recent entries
    List(ListArgs),

    /// Show the current streak
    Streak,

    /// Mood distribution over a trailing window
    MoodTrend(MoodTrendArgs),

    /// Summary of the current week
    Weekly,

    /// Export a date range to Markdown
    ExportMd(ExportArgs),

    /// Show tag frequency
    TagCloud,

    /// Check journal integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
