//! Command handlers for the CLI.
//!
//! Two real surfaces exist: the interactive TUI (`ui`) and a one-shot table
//! render of the supplied task feed (`list`). Everything operates on the
//! in-memory task list; nothing is written to disk.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::fields::{format_category, format_priority};
use crate::task::Task;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive task list UI.
    Ui,

    /// Print the supplied tasks as a table and exit.
    List,

    /// Generate shell completions.
    Completions {
        /// Target shell: bash | zsh | fish | powershell | elvish.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal UI seeded with the given tasks.
pub fn cmd_ui(tasks: Vec<Task>) {
    if let Err(err) = run_tui(tasks) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Print tasks to stdout in a formatted table.
pub fn cmd_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    print_table(tasks);
}

/// Generate shell completion scripts on stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

/// Print tasks in a formatted table: the same four bound columns the UI
/// rows carry.
pub fn print_table(tasks: &[Task]) {
    // Header.
    println!(
        "{:<5} {:<28} {:<8} {:<10} {}",
        "ID", "Title", "Pri", "Category", "Description"
    );
    for t in tasks {
        println!(
            "{:<5} {:<28} {:<8} {:<10} {}",
            t.id,
            truncate(&t.title, 28),
            format_priority(t.priority),
            format_category(t.category),
            truncate(&t.description, 50),
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-ten", 11), "exactly-ten");
        assert_eq!(truncate("a much longer string", 8), "a much …");
    }
}
