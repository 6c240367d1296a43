//! # CLI Layer
//!
//! The only place in the codebase that knows about stdout, stderr, logging
//! setup and exit codes.
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging, dispatch
//! - `init_context()`: resolve the data file, build the `TodoApi`
//! - `handle_*()`: per-command handlers that call the API and print the list

use super::render::{print_todos, UNKNOWN_COMMAND};
use super::setup::{normalize_flags, Cli, Commands};
use clap::Parser;
use std::path::PathBuf;
use todolist::api::TodoApi;
use todolist::error::{Result, TodoError};
use todolist::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_flags(std::env::args_os()));
    init_logging(cli.verbose);

    let command = cli.command.ok_or(TodoError::MissingCommand)?;
    if let Commands::Unknown(args) = &command {
        debug!(command = ?args.first(), "unknown command");
        println!("{}", UNKNOWN_COMMAND);
        return Ok(());
    }

    let mut ctx = init_context(cli.file)?;

    match command {
        Commands::Add { title } => handle_add(&mut ctx, &title),
        Commands::List => handle_list(&ctx),
        Commands::Done { id } => handle_done(&mut ctx, id),
        Commands::Delete { id } => handle_delete(&mut ctx, id),
        Commands::Unknown(_) => Ok(()),
    }
}

/// Logs go to stderr. `RUST_LOG` picks the filter unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("todolist=debug,todo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(file: Option<PathBuf>) -> Result<AppContext> {
    let store = match file {
        Some(path) => FileStore::new(path),
        None => FileStore::under(&std::env::current_dir().map_err(TodoError::Io)?),
    };
    debug!(data_file = %store.path().display(), "resolved storage");

    Ok(AppContext {
        api: TodoApi::new(store),
    })
}

fn handle_add(ctx: &mut AppContext, title: &str) -> Result<()> {
    let result = ctx.api.add_todo(title)?;
    print_todos(&result.listed_todos);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_todos()?;
    print_todos(&result.listed_todos);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.mark_done(id)?;
    print_todos(&result.listed_todos);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.delete_todo(id)?;
    print_todos(&result.listed_todos);
    Ok(())
}
