//! # CLI Layer
//!
//! This module is **one possible UI client** for bookshelf. It is the only
//! place that parses arguments, talks to the terminal and picks exit codes.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, sets up logging and dispatches
//! - `init_context()`: resolves the config directory and catalog file, builds the API
//! - `handle_*()`: non-interactive subcommands
//! - [`super::menu`]: the interactive session used when no subcommand is given

use super::menu::run_menu;
use super::print::{print_messages, render_table};
use super::prompt::Prompter;
use super::setup::{Cli, Commands};
use bookshelf::api::{CatalogApi, ConfigAction};
use bookshelf::config::{CatalogConfig, DATA_FILE_ENV};
use bookshelf::error::{CatalogError, Result};
use bookshelf::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Overrides the platform config directory (used by tests and scripts).
const CONFIG_DIR_ENV: &str = "BOOKSHELF_CONFIG_DIR";

struct AppContext {
    api: CatalogApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    tracing::debug!("Using catalog {}", ctx.api.store().path().display());

    match cli.command {
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term.join(" ")),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_interactive(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,bookshelf=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "bookshelf", "bookshelf")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CatalogError::Store("Could not determine config dir".to_string()))?,
    };

    let config = CatalogConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config in {}: {}", config_dir.display(), e);
        CatalogConfig::default()
    });

    let env_file = std::env::var_os(DATA_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let data_file = config.resolve_data_file(cli.file.as_deref(), env_file.as_deref(), &cwd);

    let api = CatalogApi::new(FileStore::new(data_file), config_dir);
    Ok(AppContext { api })
}

fn handle_interactive(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());
    run_menu(&mut ctx.api, &mut prompt)
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    let mut out = io::stdout().lock();
    if !result.listed_books.is_empty() {
        write!(out, "{}", render_table(&result.listed_books))?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_books(&term)?;
    let mut out = io::stdout().lock();
    if !result.listed_books.is_empty() {
        write!(out, "{}", render_table(&result.listed_books))?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => ConfigAction::ShowAll,
        (Some("data-file"), Some(v)) => ConfigAction::SetDataFile(PathBuf::from(v)),
        (Some(other), _) => {
            return Err(CatalogError::Api(format!("Unknown config key: {}", other)));
        }
    };

    let result = ctx.api.config(action)?;
    let mut out = io::stdout().lock();
    if let Some(config) = &result.config {
        let shown = config
            .data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unset)".to_string());
        writeln!(out, "data-file = {}", shown)?;
        writeln!(out, "catalog   = {}", ctx.api.store().path().display())?;
        writeln!(out, "config    = {}", ctx.api.config_dir().display())?;
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}
