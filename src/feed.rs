//! Inbound task feed.
//!
//! Tasks are supplied by the caller as a JSON array (`--tasks <path>`). The
//! feed is read-only input for seeding the adapter; nothing is ever written
//! back and all mutations stay in memory.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::task::Task;

/// Load tasks from a JSON file.
///
/// Duplicate ids are dropped, first occurrence wins, so the adapter never
/// starts with two rows sharing an identity. A malformed file is an error;
/// callers decide whether to degrade to an empty list.
pub fn load_tasks(path: &Path) -> io::Result<Vec<Task>> {
    let mut buf = String::new();
    File::open(path)?.read_to_string(&mut buf)?;
    let tasks: Vec<Task> = serde_json::from_str(&buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(dedup_by_id(tasks))
}

/// Load tasks if a path was given, degrading to an empty list with a
/// message on stderr when the feed is missing or malformed.
pub fn load_tasks_or_default(path: Option<&Path>) -> Vec<Task> {
    let Some(path) = path else {
        return Vec::new();
    };
    match load_tasks(path) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Error reading task feed {}, starting empty: {e}", path.display());
            Vec::new()
        }
    }
}

fn dedup_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks.into_iter().filter(|t| seen.insert(t.id)).collect()
}
