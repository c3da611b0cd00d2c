//! # TM - Task List Manager
//!
//! A terminal task list manager built around an incremental list adapter.
//!
//! ## Key Features
//!
//! - **In-Memory Task List**: tasks are supplied by the caller (optionally
//!   from a JSON feed via `--tasks`) and live only for the session
//! - **Incremental List Binding**: a `TaskAdapter` owns the visible row
//!   sequence and reports minimal insert/update/move/remove notifications
//!   to the hosting list view, which keeps its selection on the same item
//! - **Row Click Forwarding**: activating a row reports `(task, index)` to
//!   a registered listener, which opens the per-task options screen
//! - **Add/Edit Forms**: title, description, priority and category with
//!   required-field validation
//! - **Theming**: dark/light palette toggle at runtime
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI, empty
//! tm ui
//!
//! # Launch the TUI with initial tasks from a JSON feed
//! tm ui --tasks tasks.json
//!
//! # Print the supplied tasks as a table
//! tm list --tasks tasks.json
//! ```
//!
//! Nothing is persisted: the feed is read-only input, and all changes made
//! in the UI are discarded on exit.

use clap::Parser;

pub mod adapter;
pub mod cli;
pub mod cmd;
pub mod feed;
pub mod fields;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use feed::load_tasks_or_default;

fn main() {
    let cli = Cli::parse();
    let tasks = load_tasks_or_default(cli.tasks.as_deref());

    match cli.command {
        None | Some(Commands::Ui) => cmd_ui(tasks),
        Some(Commands::List) => cmd_list(&tasks),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
    }
}
