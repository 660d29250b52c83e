//! # CLI Layer
//!
//! This module is **one possible UI client** for userdir. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin for `browse`)
//! - Handles argument parsing
//! - Installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the config directory, loads config, picks the source
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_messages, render_stats, render_text_list, render_user_detail, render_user_page,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use userdir::api::{CmdMessage, CmdResult, ConfigAction, DirectoryApi, LoadState};
use userdir::commands::browse::{BrowseAction, BROWSE_HELP};
use userdir::config::DirectoryConfig;
use userdir::error::{DirectoryError, Result};
use userdir::source::file::FileSource;
use userdir::source::http::HttpSource;
use userdir::source::UserSource;

/// Directory holding config.json; overrides the platform config directory.
const HOME_ENV: &str = "USERDIR_HOME";
const PROMPT: &str = "userdir> ";

struct AppContext {
    api: DirectoryApi<Box<dyn UserSource>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, page }) => handle_list(&mut ctx, search, page),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Browse { search }) => handle_browse(&mut ctx, search),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,userdir=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed when run() is driven from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "userdir", "userdir")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DirectoryError::Config("Could not determine config dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config_dir()?;
    let config = DirectoryConfig::load(&dir)?;
    tracing::debug!(dir = %dir.display(), ?config, "config loaded");

    let source: Box<dyn UserSource> = match (&cli.from_file, &cli.base_url) {
        (Some(path), _) => Box::new(FileSource::new(path)),
        (None, Some(url)) => Box::new(HttpSource::new(url.as_str()).with_timeout(config.timeout())),
        (None, None) => {
            Box::new(HttpSource::new(config.base_url.as_str()).with_timeout(config.timeout()))
        }
    };

    Ok(AppContext {
        api: DirectoryApi::new(source, config.page_size(), dir),
    })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, page: Option<i64>) -> Result<()> {
    let loaded = ctx.api.refresh();
    print_messages(&loaded.messages);

    if let Some(query) = search {
        ctx.api.search(query);
    }
    if let Some(page) = page {
        ctx.api.go_to_page(page);
    }

    let result = ctx.api.current_page();
    let stats = match ctx.api.load_state() {
        LoadState::Ready => ctx.api.stats().stats,
        LoadState::Loading | LoadState::Failed => None,
    };
    if let Some(page) = &result.page {
        print!("{}", render_user_page(page, stats.as_ref()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.user_detail(id);
    print_result(&result);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let loaded = ctx.api.refresh();
    print_messages(&loaded.messages);
    if ctx.api.load_state() == LoadState::Ready {
        if let Some(stats) = ctx.api.stats().stats {
            print!("{}", render_stats(&stats));
        }
    }
    Ok(())
}

fn handle_browse(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();

    let mut result = ctx.api.refresh();
    if let Some(query) = search {
        let searched = ctx.api.search(query);
        result.page = searched.page;
    }
    print_result(&result);
    if interactive {
        println!("Type ? for help, q to quit.");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.parse::<BrowseAction>() {
            Ok(BrowseAction::Quit) => break,
            Ok(BrowseAction::Help) => println!("{}", BROWSE_HELP),
            Ok(action) => print_result(&ctx.api.dispatch(action)),
            Err(DirectoryError::Api(hint)) => print_messages(&[CmdMessage::warning(hint)]),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut lines = Vec::new();
    if key.is_none() {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Prints whatever a result carries: a page, a user, then its messages.
fn print_result(result: &CmdResult) {
    if let Some(page) = &result.page {
        print!("{}", render_user_page(page, None));
    }
    if let Some(user) = &result.user {
        print!("{}", render_user_detail(user));
    }
    print_messages(&result.messages);
}
