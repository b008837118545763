//! Site Configuration
//!
//! Types for the `config.json` document: the site title and subtitle shown
//! in the page header, plus the ordered category definitions that drive the
//! filter bar and card badges. Loaded once at startup and never mutated.

use serde::Deserialize;

/// Header text used when `config.json` omits `siteTitle`
pub const DEFAULT_SITE_TITLE: &str = "おでかけログ";

/// A category definition with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Unique key referenced by `Place::category`
    pub id: String,
    /// Human-readable name shown on buttons and badges
    pub label: String,
    /// Glyph shown on the filter button and as the card image fallback
    pub emoji: String,
    /// CSS color value used for badges, gradients, and active buttons
    pub color: String,
}

/// The `config.json` document
///
/// `site_title` and `site_subtitle` are optional: when absent, the header
/// keeps its built-in text instead of being cleared.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub site_title: Option<String>,

    #[serde(default)]
    pub site_subtitle: Option<String>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

impl SiteConfig {
    /// Title for the page header and document title
    pub fn title(&self) -> &str {
        self.site_title.as_deref().unwrap_or(DEFAULT_SITE_TITLE)
    }

    /// Subtitle line, empty when the config does not provide one
    pub fn subtitle(&self) -> &str {
        self.site_subtitle.as_deref().unwrap_or("")
    }
}
