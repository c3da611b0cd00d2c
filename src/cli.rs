use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// In-memory task manager with a terminal UI.
/// Initial tasks can be supplied as a JSON array via --tasks.
#[derive(Parser)]
#[command(name = "tm", version, about = "Task list manager TUI")]
pub struct Cli {
    /// Path to a JSON file of initial tasks (read-only).
    #[arg(long, global = true)]
    pub tasks: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
