//! Taskpad MCP Server - Main Entry Point
//!
//! This is the main entry point for the task server application.
//! The actual implementation is in the `taskpad_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use taskpad_mcp::{Storage, TaskServerHandler, TaskStore, formatting, import};
use tracing::Level;

/// Taskpad MCP Server - to-do list management via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file
    file: String,

    /// Commit the data file to its git repository after every save
    #[arg(long)]
    git_commit: bool,

    /// Seconds between due-date reminder scans
    #[arg(long, default_value_t = 3600)]
    reminder_interval: u64,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Import tasks from a browser local-storage JSON export before serving
    #[arg(long)]
    import: Option<PathBuf>,
}

fn init_logging(level: Level) {
    // stdout carries the MCP transport, so logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Log reminder buckets once at startup and then every `interval`
fn spawn_reminder_scan(store: Arc<Mutex<TaskStore>>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let reminders = store
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .due_reminders();
            if reminders.is_empty() {
                tracing::debug!("reminder scan: nothing due");
                continue;
            }
            tracing::info!(
                due_today = reminders.due_today.len(),
                due_tomorrow = reminders.due_tomorrow.len(),
                overdue = reminders.overdue.len(),
                "{}",
                formatting::format_reminders(&reminders).replace('\n', " ")
            );
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(args.log_level);

    // imported tasks go in before the empty-list check that seeds examples
    let imported = match &args.import {
        Some(path) => import::read_browser_export(path)?,
        None => Vec::new(),
    };
    let total = imported.len();
    let storage = Storage::new(&args.file, args.git_commit);
    let (store, added) = TaskStore::open_with_import(storage, imported);
    if args.import.is_some() {
        tracing::info!(added, skipped = total - added, "imported tasks");
    }
    let handler = TaskServerHandler::from_store(store);

    spawn_reminder_scan(
        handler.shared_store(),
        Duration::from_secs(args.reminder_interval.max(1)),
    );

    tracing::info!(file = %args.file, "serving MCP over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
