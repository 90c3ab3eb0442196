//! # CLI Layer
//!
//! This module is **one possible UI client** for todolist, not the application itself.
//! It is the only place that parses arguments, talks to the terminal, asks for
//! confirmation and decides exit codes. Everything else goes through [`TodoApi`].
//!
//! - `run()`: main dispatch (called by `main.rs`)
//! - `init_context()`: resolves the data dir, loads config, opens the store
//! - `handle_*()`: per-command handlers that call the API and print

use super::print::{print_full_todos, print_messages, print_todos};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;
use todolist::api::{ConfigAction, TodoApi, TodoPaths};
use todolist::config::TodoConfig;
use todolist::error::{Result, TodoError};
use todolist::store::fs_backend::FsBackend;
use todolist::store::TodoStore;

/// Overrides the OS data directory, mainly for tests and scripting.
const HOME_ENV: &str = "TODOLIST_HOME";

/// Shown when a todo would end up blank.
const EMPTY_CONTENT_PROMPT: &str = "Please enter a task.";

struct AppContext {
    api: TodoApi<FsBackend>,
    date_format: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { content }) => handle_add(&mut ctx, content),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Edit { id, content }) => handle_edit(&mut ctx, id, content),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, ids, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
        None => handle_list(&ctx, None),
    }
}

pub fn report_error(err: &TodoError) {
    if err.is_validation() {
        eprintln!("{}", EMPTY_CONTENT_PROMPT.red());
    } else {
        eprintln!("{} {}", "Error:".red(), err);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "todolist", "todolist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = TodoConfig::load_or_default(&data_dir);
    let persist = config.persist && !cli.no_persist;
    debug!(
        "Opening todos in {} (persist: {})",
        data_dir.display(),
        persist
    );

    let store = TodoStore::open(FsBackend::new(data_dir.clone()))
        .with_persistence(persist)
        .with_date_format(&config.date_format);
    info!("Loaded {} todos", store.len());

    let api = TodoApi::new(store, TodoPaths::new(data_dir));
    Ok(AppContext {
        api,
        date_format: config.date_format,
    })
}

fn handle_add(ctx: &mut AppContext, content: Vec<String>) -> Result<()> {
    let result = ctx.api.add_todo(&content.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_todos(search.as_deref())?;
    print_todos(&result.listed_todos, &ctx.date_format);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_todos(&ids)?;
    print_full_todos(&result.listed_todos);
    print_messages(&result.messages);
    if result.listed_todos.is_empty() {
        if let Some(id) = result.missing_ids.first() {
            return Err(TodoError::NotFound(*id));
        }
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String, content: Vec<String>) -> Result<()> {
    let result = ctx.api.update_todo(&id, &content.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>, yes: bool) -> Result<()> {
    // Resolve first so the prompt can show what is about to go
    let targets = ctx.api.view_todos(&ids)?;
    print_messages(&targets.messages);
    if targets.listed_todos.is_empty() {
        return Ok(());
    }

    if !yes {
        println!("This will delete the following todos:");
        for todo in &targets.listed_todos {
            println!("  {}. {}", todo.id, todo.content);
        }
        print!("Delete? [y/N] ");
        io::stdout().flush().map_err(TodoError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(TodoError::Io)?;

        if !matches!(input.trim(), "y" | "Y" | "yes") {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    let ids: Vec<String> = targets
        .listed_todos
        .iter()
        .map(|t| t.id.to_string())
        .collect();
    let result = ctx.api.delete_todos(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in TodoConfig::KEYS {
                if let Some(val) = config.get(key) {
                    println!("{} = {}", key, val);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_paths()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}
