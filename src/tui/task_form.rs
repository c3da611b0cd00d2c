//! Task form handling for the terminal user interface.
//!
//! This module provides the `TaskForm` structure used by the add and edit
//! screens: two text inputs plus two closed-vocabulary selectors, with the
//! required-field validation the save path enforces.

use crate::fields::{Category, Priority, ALL_CATEGORIES, ALL_PRIORITIES};
use crate::task::Task;
use crate::tui::input::InputField;

/// Field order constants for the form.
pub const TITLE_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 1;
pub const PRIORITY_FIELD: usize = 2;
pub const CATEGORY_FIELD: usize = 3;
pub const FIELD_COUNT: usize = 4;

/// Task form for creating and editing tasks.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub priority: usize,
    pub category: usize,
    pub current_field: usize,
    pub error: Option<&'static str>,
}

impl TaskForm {
    /// Create an empty form with default selections.
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            description: InputField::new(),
            priority: 1, // Medium
            category: 0, // Work
            current_field: TITLE_FIELD,
            error: None,
        };
        form.update_active_field();
        form
    }

    /// Create a form pre-populated from an existing task, for editing.
    pub fn from_task(task: &Task) -> Self {
        let mut form = Self {
            title: InputField::with_value(&task.title),
            description: InputField::with_value(&task.description),
            priority: ALL_PRIORITIES.iter().position(|&p| p == task.priority).unwrap_or(1),
            category: ALL_CATEGORIES.iter().position(|&c| c == task.category).unwrap_or(0),
            current_field: TITLE_FIELD,
            error: None,
        };
        form.update_active_field();
        form
    }

    /// Mark the text input matching `current_field` as active.
    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_FIELD;
        self.description.active = self.current_field == DESCRIPTION_FIELD;
    }

    /// Move focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move focus to the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + FIELD_COUNT - 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Whether focus is on a text input (as opposed to a selector).
    pub fn on_text_field(&self) -> bool {
        self.current_field == TITLE_FIELD || self.current_field == DESCRIPTION_FIELD
    }

    /// The currently focused text input, if focus is on one.
    pub fn active_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            TITLE_FIELD => Some(&mut self.title),
            DESCRIPTION_FIELD => Some(&mut self.description),
            _ => None,
        }
    }

    /// Cycle the focused selector forward or backward.
    pub fn cycle_selector(&mut self, forward: bool) {
        match self.current_field {
            PRIORITY_FIELD => {
                self.priority = cycle(self.priority, ALL_PRIORITIES.len(), forward);
            }
            CATEGORY_FIELD => {
                self.category = cycle(self.category, ALL_CATEGORIES.len(), forward);
            }
            _ => {}
        }
    }

    /// The selected priority.
    pub fn selected_priority(&self) -> Priority {
        ALL_PRIORITIES[self.priority]
    }

    /// The selected category.
    pub fn selected_category(&self) -> Category {
        ALL_CATEGORIES[self.category]
    }

    /// Check required fields, recording the first failure for display.
    pub fn validate(&mut self) -> bool {
        self.error = if self.title.trimmed().is_empty() {
            Some("Title is required")
        } else if self.description.trimmed().is_empty() {
            Some("Description is required")
        } else {
            None
        };
        self.error.is_none()
    }

    /// Build the task this form describes. Call after `validate`.
    pub fn build(&self, id: u64) -> Task {
        Task::new(
            id,
            self.title.trimmed(),
            self.description.trimmed(),
            self.selected_priority(),
            self.selected_category(),
        )
    }
}

fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_requires_title_and_description() {
        let mut form = TaskForm::new();
        assert!(!form.validate());
        assert_eq!(form.error, Some("Title is required"));

        form.title = InputField::with_value("  Pack bags  ");
        assert!(!form.validate());
        assert_eq!(form.error, Some("Description is required"));

        form.description = InputField::with_value("For the trip");
        assert!(form.validate());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_build_trims_text_fields() {
        let mut form = TaskForm::new();
        form.title = InputField::with_value("  Pack bags ");
        form.description = InputField::with_value(" For the trip  ");
        form.priority = 2; // High
        form.category = 1; // Personal
        assert!(form.validate());

        let task = form.build(7);
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Pack bags");
        assert_eq!(task.description, "For the trip");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category, Category::Personal);
    }

    #[test]
    fn test_from_task_round_trip() {
        let original = Task::new(3, "Call plumber", "Kitchen sink", Priority::High, Category::Other);
        let form = TaskForm::from_task(&original);
        assert_eq!(form.build(3), original);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = TaskForm::new();
        assert_eq!(form.current_field, TITLE_FIELD);
        form.prev_field();
        assert_eq!(form.current_field, CATEGORY_FIELD);
        form.next_field();
        assert_eq!(form.current_field, TITLE_FIELD);
        assert!(form.title.active);
        assert!(!form.description.active);
    }

    #[test]
    fn test_selector_cycling() {
        let mut form = TaskForm::new();
        form.current_field = PRIORITY_FIELD;
        form.update_active_field();
        assert_eq!(form.selected_priority(), Priority::Medium);
        form.cycle_selector(true);
        assert_eq!(form.selected_priority(), Priority::High);
        form.cycle_selector(true);
        assert_eq!(form.selected_priority(), Priority::Low);
        form.cycle_selector(false);
        assert_eq!(form.selected_priority(), Priority::High);
    }
}
