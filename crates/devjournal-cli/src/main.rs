//! devjournal - a CLI-first daily developer log
//!
//! This is the command-line interface for devjournal. It parses arguments,
//! resolves where the journal lives, and hands off to the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};
use commands::entries::{
    handle_add, handle_export, handle_list, handle_search, handle_show, handle_today,
};
use commands::maintenance::{handle_check, handle_completions};
use commands::stats::{handle_mood_trend, handle_streak, handle_tag_cloud, handle_weekly};
use errors::{exit_code_for, CliError};
use ui::render::print_error;

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "DEVJOURNAL_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Commands::Add(args) => handle_add(&ctx, args),
        Commands::Today => handle_today(&ctx),
        Commands::Show(args) => handle_show(&ctx, args),
        Commands::Search(args) => handle_search(&ctx, args),
        Commands::List(args) => handle_list(&ctx, args),
        Commands::Streak => handle_streak(&ctx),
        Commands::MoodTrend(args) => handle_mood_trend(&ctx, args),
        Commands::Weekly => handle_weekly(&ctx),
        Commands::ExportMd(args) => handle_export(&ctx, args),
        Commands::TagCloud => handle_tag_cloud(&ctx),
        Commands::Check => handle_check(&ctx),
        Commands::Completions(args) => handle_completions(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        let ui = ui::UiContext::from_env(cli.no_color);
        match err.downcast_ref::<CliError>() {
            Some(CliError::NotFound { message, hint }) => {
                print_error(&ui, message, Some(hint));
            }
            _ => print_error(&ui, &format!("{:#}", err), None),
        }
        std::process::exit(exit_code_for(&err));
    }
}
