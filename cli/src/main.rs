mod menu;
mod render;
mod tui;

use std::io;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use taskmgr_core::{MemoryTaskRepository, TaskService};
use tracing_subscriber::EnvFilter;

use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "taskmgr")]
#[command(about = "An in-memory to-do list manager", long_about = None)]
struct Cli {
    /// Render task listings as a table instead of summary lines
    #[arg(long, global = true)]
    table: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactive text menu (default)
    Menu,
    /// Open the Terminal User Interface
    Tui,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn init_logging() {
    if std::env::var("TASKMGR_DEBUG").is_err() {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taskmgr_core=debug,taskmgr=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Tasks live only as long as this process.
    let mut service = TaskService::new(MemoryTaskRepository::new());

    match cli.command {
        Some(Commands::Tui) => tui::run(service, local_now)?,
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            Menu::new(&mut service, stdin.lock(), io::stdout(), local_now, cli.table).run()?;
        }
    }
    Ok(())
}
