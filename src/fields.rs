//! Enumerations and field types for task records.
//!
//! This module defines the closed vocabularies used to categorise tasks:
//! priority levels and categories. Both are fixed sets so that form
//! selectors and list output can enumerate them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
}

/// Task category for grouping related work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[serde(alias = "Work")]
    Work,
    #[serde(alias = "Personal")]
    Personal,
    #[serde(alias = "Shopping")]
    Shopping,
    #[serde(alias = "Other")]
    Other,
}

/// All priorities in form-selector order.
pub const ALL_PRIORITIES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

/// All categories in form-selector order.
pub const ALL_CATEGORIES: [Category; 4] =
    [Category::Work, Category::Personal, Category::Shopping, Category::Other];

/// Format a priority level for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

/// Format a category for display.
pub fn format_category(c: Category) -> &'static str {
    match c {
        Category::Work => "Work",
        Category::Personal => "Personal",
        Category::Shopping => "Shopping",
        Category::Other => "Other",
    }
}
