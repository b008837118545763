//! Filter Bar
//!
//! Declarative description of the category filter controls plus the
//! single-select state transition. The bar always carries one leading
//! "all" button and one button per configured category, in config order;
//! exactly one button is active at any time.

use crate::config::Category;
use crate::repository::ALL_CATEGORIES;

/// Label of the leading no-constraint button
pub const ALL_LABEL: &str = "すべて";

/// Background used for an active button that carries no category color
pub const NEUTRAL_ACTIVE_BACKGROUND: &str = "#1a1a2e";

/// Foreground of any active button
pub const ACTIVE_FOREGROUND: &str = "#fff";

/// One filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// Category id, or `"all"` for the leading button
    pub id: String,
    /// Button text: `"{emoji} {label}"`, or the localized "All"
    pub label: String,
    /// Category color; the "all" button has none
    pub color: Option<String>,
    /// Whether this is the currently selected control
    pub active: bool,
}

impl FilterButton {
    /// Background applied while this button is active
    pub fn active_background(&self) -> &str {
        self.color.as_deref().unwrap_or(NEUTRAL_ACTIVE_BACKGROUND)
    }
}

/// The filter bar and its selection state
#[derive(Debug, Clone, Default)]
pub struct FilterBar {
    buttons: Vec<FilterButton>,
}

impl FilterBar {
    /// Build the bar from the configured categories
    ///
    /// The "all" button leads and starts active.
    pub fn new(categories: &[Category]) -> Self {
        let mut buttons = Vec::with_capacity(categories.len() + 1);
        buttons.push(FilterButton {
            id: ALL_CATEGORIES.to_string(),
            label: ALL_LABEL.to_string(),
            color: None,
            active: true,
        });
        for cat in categories {
            buttons.push(FilterButton {
                id: cat.id.clone(),
                label: format!("{} {}", cat.emoji, cat.label),
                color: Some(cat.color.clone()),
                active: false,
            });
        }
        Self { buttons }
    }

    /// All buttons in display order
    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    /// Id of the single active button
    pub fn active_id(&self) -> &str {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.id.as_str())
            .unwrap_or(ALL_CATEGORIES)
    }

    /// Select a button by id
    ///
    /// Deactivates every other button. An id with no matching button
    /// leaves the selection unchanged. Returns the active id after the
    /// transition, to feed straight into the repository filter.
    pub fn select(&mut self, id: &str) -> &str {
        if self.buttons.iter().any(|b| b.id == id) {
            for button in &mut self.buttons {
                button.active = button.id == id;
            }
        }
        self.active_id()
    }
}
