//! Task data structure and related functionality.
//!
//! This module defines the core `Task` struct that represents a single work
//! item. Equality (`PartialEq`) compares full field content; identity is
//! carried by `id` alone and checked via [`Task::same_identity`]. The two
//! notions are kept separate because the list adapter matches "same item" by
//! identity and "same content" by equality when diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::fields::{Category, Priority};

/// A single work item.
///
/// Tasks are created and edited outside the adapter (forms, the task feed);
/// the adapter only stores the instances handed to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
}

impl Task {
    /// Create a task from its parts.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        category: Category,
    ) -> Self {
        Task {
            id,
            title: title.into(),
            description: description.into(),
            priority,
            category,
        }
    }

    /// Whether `other` refers to the same item, regardless of content.
    pub fn same_identity(&self, other: &Task) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_id_only() {
        let a = Task::new(1, "Write report", "Quarterly numbers", Priority::High, Category::Work);
        let mut b = a.clone();
        b.title = "Write the report".into();

        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_is_by_content() {
        let a = Task::new(2, "Groceries", "Milk and eggs", Priority::Low, Category::Shopping);
        let b = a.clone();
        assert_eq!(a, b);

        let c = Task::new(3, "Groceries", "Milk and eggs", Priority::Low, Category::Shopping);
        assert_ne!(a, c);
        assert!(!a.same_identity(&c));
    }
}
