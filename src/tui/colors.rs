//! Color constants and themes for the terminal user interface.

use ratatui::style::Color;

use crate::fields::Priority;

/// Used for high-priority rows
pub const CRIMSON: Color = Color::Rgb(190, 30, 30);
/// Used for medium-priority rows
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Used for low-priority rows
pub const DARK_GREEN: Color = Color::Rgb(0, 120, 0);

/// Selectable UI palette. Toggled at runtime from the task list;
/// in-memory only, the choice is not persisted anywhere.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The other theme, for the toggle key.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Default text color.
    pub fn fg(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    /// Background for the highlighted row.
    pub fn selection_bg(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Rgb(210, 210, 210),
        }
    }

    /// Accent color for borders and titles.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        }
    }

    /// Row color for a priority level.
    pub fn priority_color(self, p: Priority) -> Color {
        match p {
            Priority::High => CRIMSON,
            Priority::Medium => GOLD,
            Priority::Low => DARK_GREEN,
        }
    }
}
