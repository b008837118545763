//! Category Index
//!
//! A read-only id → Category view derived from the site config. Lookups
//! never fail: an id absent from the config resolves to a synthesized
//! fallback so that a place with an unmatched category still renders.

use crate::config::Category;
use std::collections::HashMap;

/// Glyph used for places whose category id is not configured
pub const FALLBACK_EMOJI: &str = "📍";

/// Neutral color used for places whose category id is not configured
pub const FALLBACK_COLOR: &str = "#6b7280";

/// O(1) category lookup with a synthesized default for unknown ids
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_id: HashMap<String, Category>,
}

impl CategoryIndex {
    /// Build the index from the configured categories, in O(n)
    pub fn build(categories: &[Category]) -> Self {
        let by_id = categories
            .iter()
            .map(|cat| (cat.id.clone(), cat.clone()))
            .collect();
        Self { by_id }
    }

    /// Resolve a category id to its metadata
    ///
    /// Unknown ids get the fallback: the pin glyph, the raw id as the
    /// label, and a neutral color.
    pub fn lookup(&self, id: &str) -> Category {
        self.by_id.get(id).cloned().unwrap_or_else(|| Category {
            id: id.to_string(),
            label: id.to_string(),
            emoji: FALLBACK_EMOJI.to_string(),
            color: FALLBACK_COLOR.to_string(),
        })
    }

    /// Whether the id is actually configured (no fallback involved)
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of configured categories
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if no categories are configured
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
